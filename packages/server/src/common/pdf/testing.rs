// PDF fixtures for tests
//
// Builds small text-only documents in memory so tests don't need files on disk.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

/// Build a PDF with one page per entry of `pages`; each string becomes a line.
///
/// Every line is written in its own text object so extraction yields one
/// line per string.
pub fn text_pdf(pages: &[&[&str]]) -> Vec<u8> {
    let pages = pages.iter().map(|lines| text_operations(lines)).collect();
    save(build(pages))
}

/// Like [`text_pdf`], but page `broken` (zero-based) carries a content
/// stream whose font operator has no operands, so its text can't be read.
pub fn pdf_with_unreadable_page(pages: &[&[&str]], broken: usize) -> Vec<u8> {
    let pages = pages
        .iter()
        .enumerate()
        .map(|(i, lines)| {
            if i == broken {
                vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec![]),
                    Operation::new("Tj", vec![Object::string_literal("lost")]),
                    Operation::new("ET", vec![]),
                ]
            } else {
                text_operations(lines)
            }
        })
        .collect();
    save(build(pages))
}

/// A single-page document whose trailer declares a standard security handler
pub fn encrypted_pdf() -> Vec<u8> {
    let mut doc = build(vec![text_operations(&["Voter ID: ABC1234567"])]);
    let encrypt_id = doc.add_object(dictionary! {
        "Filter" => "Standard",
        "V" => 1,
        "R" => 2,
        "O" => Object::string_literal(vec![0u8; 32]),
        "U" => Object::string_literal(vec![0u8; 32]),
        "P" => -4,
    });
    doc.trailer.set("Encrypt", encrypt_id);
    save(doc)
}

fn text_operations(lines: &[&str]) -> Vec<Operation> {
    let mut operations = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        let y = 750 - (i as i64) * 20;
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
        operations.push(Operation::new("Td", vec![100.into(), y.into()]));
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        operations.push(Operation::new("ET", vec![]));
    }
    operations
}

fn build(pages: Vec<Vec<Operation>>) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id: ObjectId = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });

    let page_count = pages.len() as i64;
    let mut page_ids: Vec<Object> = Vec::new();
    for operations in pages {
        let content = Content { operations };
        let encoded = content.encode().expect("failed to encode page content");
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! {
                    "F1" => font_id,
                },
            },
        });
        page_ids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids,
            "Count" => page_count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

fn save(mut doc: Document) -> Vec<u8> {
    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("failed to save test PDF");
    buf
}
