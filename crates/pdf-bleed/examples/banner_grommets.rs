use lopdf::{Dictionary, Document, Object, Stream};
use pdf_bleed::*;

/// A 24x36 inch banner: a color gradient band so the mirrored bleed is easy to see
fn create_banner_pdf() -> Document {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut content = String::new();
    for i in 0..12 {
        let shade = i as f32 / 11.0;
        content.push_str(&format!(
            "{} 0.2 {} rg {} 0 144 2592 re f\n",
            shade,
            1.0 - shade,
            i * 144
        ));
    }
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let page_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Page".to_vec())),
        ("Parent", Object::Reference(pages_id)),
        (
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(1728),
                Object::Integer(2592),
            ]),
        ),
        ("Resources", Object::Dictionary(Dictionary::new())),
        ("Contents", Object::Reference(content_id)),
    ]));

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(vec![Object::Reference(page_id)])),
        ("Count", Object::Integer(1)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));

    doc.trailer.set("Root", catalog_id);
    doc
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let source_doc = create_banner_pdf();

    let mut source_bytes = Vec::new();
    source_doc.clone().save_to(&mut source_bytes)?;
    tokio::fs::write("banner_source.pdf", source_bytes).await?;
    println!("Created banner_source.pdf (24 x 36 in)");

    // One inch of bleed all round, grommets every two feet
    let options = FinishingOptions {
        margins: BleedMargins::uniform(72.0),
        grommets: Some(GrommetOptions {
            spacing_in: 24.0,
            offset_in: 1.0,
            policy: GrommetSpacingPolicy::Distribute,
        }),
        ..Default::default()
    };

    let stats = calculate_statistics(&source_doc, &options)?;
    let finished = finish(&source_doc, &options).await?;
    save_pdf(finished, "banner_finished.pdf").await?;

    println!("Created banner_finished.pdf");
    println!("  Canvas: {:?}", stats.canvas_sizes);
    println!("  Mirrored edges: {}", stats.mirrored_edges);
    println!("  Crop mark segments: {}", stats.crop_mark_segments);
    println!("  Grommet marks: {}", stats.grommet_marks);

    Ok(())
}
