//! PDF output for paginated boards.
//!
//! Writes one PDF page per `PageDrawing`: the cell blitted as a
//! DeviceRGB image XObject, the alignment grid as vector strokes, and
//! the page label in Helvetica. Page drawings already use PDF point
//! coordinates with a bottom-left origin, so geometry passes through
//! unchanged.

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Object, ObjectId, Stream};

use crate::error::{PushpinError, Result};
use crate::page::{Document, PageDrawing, PageSize};
use crate::types::Raster;

/// Label font size in points.
const LABEL_FONT_SIZE: i64 = 12;

/// Write a paginated board document to a PDF file.
///
/// Pages are emitted in the document's order, so page N of the PDF is
/// page N of the row-major board layout.
pub fn write_pdf(document: &Document, path: &Path) -> Result<()> {
    let mut pdf = lopdf::Document::with_version("1.5");
    let pages_id = pdf.new_object_id();

    let font_id = pdf.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut kids: Vec<Object> = Vec::with_capacity(document.pages.len());
    for page in &document.pages {
        let page_id = add_page(&mut pdf, pages_id, font_id, page, document.page_size)?;
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    pdf.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = pdf.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    pdf.trailer.set("Root", catalog_id);
    pdf.compress();

    pdf.save(path).map_err(|e| PushpinError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PDF: {}", e),
    })?;

    Ok(())
}

/// Add one page object (image, grid, label) to the document.
fn add_page(
    pdf: &mut lopdf::Document,
    pages_id: ObjectId,
    font_id: ObjectId,
    page: &PageDrawing,
    size: PageSize,
) -> Result<ObjectId> {
    let image_id = pdf.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => page.cell.width() as i64,
            "Height" => page.cell.height() as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        },
        rgb_bytes(&page.cell),
    ));

    let mut ops = Vec::with_capacity(page.grid.len() * 2 + 12);

    // Blit: the unit image square mapped onto the scaled rectangle.
    ops.push(Operation::new("q", vec![]));
    ops.push(Operation::new(
        "cm",
        vec![
            page.scaled_width.into(),
            0.into(),
            0.into(),
            page.scaled_height.into(),
            page.origin.0.into(),
            page.origin.1.into(),
        ],
    ));
    ops.push(Operation::new("Do", vec!["Im0".into()]));
    ops.push(Operation::new("Q", vec![]));

    // Alignment grid.
    let c = page.grid_colour;
    ops.push(Operation::new(
        "RG",
        vec![
            (c.r as f32 / 255.0).into(),
            (c.g as f32 / 255.0).into(),
            (c.b as f32 / 255.0).into(),
        ],
    ));
    for seg in &page.grid {
        ops.push(Operation::new("m", vec![seg.from.0.into(), seg.from.1.into()]));
        ops.push(Operation::new("l", vec![seg.to.0.into(), seg.to.1.into()]));
    }
    ops.push(Operation::new("S", vec![]));

    // Page label.
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec!["F1".into(), LABEL_FONT_SIZE.into()]));
    ops.push(Operation::new(
        "Td",
        vec![page.label_pos.0.into(), page.label_pos.1.into()],
    ));
    ops.push(Operation::new(
        "Tj",
        vec![Object::string_literal(page.label.as_str())],
    ));
    ops.push(Operation::new("ET", vec![]));

    let encoded = Content { operations: ops }
        .encode()
        .map_err(|e| PushpinError::Build {
            message: format!("Failed to encode page content: {}", e),
            help: None,
        })?;
    let content_id = pdf.add_object(Stream::new(dictionary! {}, encoded));

    let page_id = pdf.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            size.width.into(),
            size.height.into(),
        ],
        "Contents" => content_id,
        "Resources" => dictionary! {
            "Font" => dictionary! { "F1" => font_id },
            "XObject" => dictionary! { "Im0" => image_id },
        },
    });

    Ok(page_id)
}

/// Flatten a raster into raw RGB samples, top row first, as PDF image
/// streams expect.
fn rgb_bytes(raster: &Raster) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(raster.pixels().len() * 3);
    for c in raster.pixels() {
        bytes.extend_from_slice(&[c.r, c.g, c.b]);
    }
    bytes
}
