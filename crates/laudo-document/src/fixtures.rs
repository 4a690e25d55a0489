// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-memory sample files for tests. Each builder produces a structurally
// valid file of the named format; nothing here touches the filesystem.

use std::io::{Cursor, Write};

use dicom_core::{DataElement, PrimitiveValue, VR};
use dicom_dictionary_std::tags;
use dicom_object::{FileMetaTableBuilder, InMemDicomObject};
use image::{ImageFormat, RgbImage};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// One-page PDF with each line of `text` as an embedded text operation.
pub fn report_pdf_bytes(text: &str) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    // Each line is its own BT…ET text object: lopdf's extract_text only emits
    // a line break at ET (it ignores Td positioning), so per-line text objects
    // are what make the embedded text round-trip with its line structure intact.
    let mut operations = Vec::new();
    let mut y = 780;
    for line in text.lines() {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new("Tf", vec!["F1".into(), 11.into()]));
        operations.push(Operation::new("Td", vec![50.into(), y.into()]));
        operations.push(Operation::new("Tj", vec![Object::string_literal(line)]));
        operations.push(Operation::new("ET", vec![]));
        y -= 14;
    }

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().expect("encode fixture content stream"),
    ));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("serialise fixture PDF");
    bytes
}

/// One-page PDF with no text operations at all.
pub fn blank_pdf_bytes() -> Vec<u8> {
    report_pdf_bytes("")
}

/// Minimal valid DICOM file: preamble, file meta, and a tiny dataset with
/// patient name, modality, and a 1x1 pixel matrix.
pub fn dicom_bytes() -> Vec<u8> {
    let mut obj = InMemDicomObject::new_empty();
    obj.put(DataElement::new(
        tags::PATIENT_NAME,
        VR::PN,
        PrimitiveValue::from("Test"),
    ));
    obj.put(DataElement::new(
        tags::MODALITY,
        VR::CS,
        PrimitiveValue::from("CT"),
    ));
    obj.put(DataElement::new(tags::ROWS, VR::US, PrimitiveValue::from(1u16)));
    obj.put(DataElement::new(
        tags::COLUMNS,
        VR::US,
        PrimitiveValue::from(1u16),
    ));

    // Secondary Capture Image Storage, Explicit VR Little Endian.
    let meta = FileMetaTableBuilder::new()
        .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.7")
        .media_storage_sop_instance_uid("2.25.940984041295160837579573561")
        .transfer_syntax("1.2.840.10008.1.2.1")
        .build()
        .expect("build fixture file meta");

    let mut bytes = Vec::new();
    obj.with_exact_meta(meta)
        .write_all(&mut bytes)
        .expect("serialise fixture DICOM");
    bytes
}

/// Bytes that pass the DICOM preamble probe but fail real parsing.
pub fn corrupt_dicom_bytes() -> Vec<u8> {
    let mut bytes = vec![0u8; 128];
    bytes.extend_from_slice(b"DICM");
    bytes.extend_from_slice(b"this is not a file meta group");
    bytes
}

/// Empty ZIP archive (end-of-central-directory record only).
pub fn empty_zip_bytes() -> Vec<u8> {
    let writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer.finish().expect("finish empty archive").into_inner()
}

/// ZIP archive containing one small text entry per name, in order.
pub fn zip_bytes(names: &[&str]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for name in names {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .expect("start archive entry");
        writer.write_all(b"conteudo").expect("write archive entry");
    }
    writer.finish().expect("finish archive").into_inner()
}

/// Solid-colour PNG of the given dimensions.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    encode_image(width, height, ImageFormat::Png)
}

/// Solid-colour JPEG of the given dimensions.
pub fn jpg_bytes(width: u32, height: u32) -> Vec<u8> {
    encode_image(width, height, ImageFormat::Jpeg)
}

fn encode_image(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let image = RgbImage::from_pixel(width, height, image::Rgb([200, 30, 30]));
    let mut bytes = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(image)
        .write_to(&mut bytes, format)
        .expect("encode fixture image");
    bytes.into_inner()
}

/// Sample report text shared by several tests.
pub fn sample_report_text() -> &'static str {
    "Indicação: Dor no peito\nAchados: Exame normal\nConclusão: Sem sinais\nData 01/02/2023 e 03-02-2024"
}
