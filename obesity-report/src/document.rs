use std::{
    fs,
    path::{Path, PathBuf},
};

use image::{codecs::jpeg::JpegEncoder, RgbImage};
use log::debug;
use lopdf::{
    content::{Content, Operation},
    dictionary, Document, Object, Stream,
};

use crate::Result;

/// File name offered for the downloaded report.
pub const REPORT_FILE_NAME: &str = "Hasil_Prediksi_Obesitas.pdf";

const JPEG_QUALITY: u8 = 90;
const IMAGE_NAME: &[u8] = b"Im0";

/// A rendered report, encoded as a single-page PDF.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportArtifact {
    pub file_name: &'static str,
    pub bytes: Vec<u8>,
}

impl ReportArtifact {
    pub fn from_image(image: &RgbImage) -> Result<Self> {
        Ok(Self {
            file_name: REPORT_FILE_NAME,
            bytes: encode_pdf(image)?,
        })
    }

    /// Write the document into `dir` under its file name.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = dir.as_ref().join(self.file_name);
        fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// Encode `image` as a one page PDF whose page size equals the image size in
/// points. The raster is embedded as a JPEG.
pub fn encode_pdf(image: &RgbImage) -> Result<Vec<u8>> {
    let (width, height) = (image.width() as i64, image.height() as i64);

    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY).encode_image(image)?;
    debug!("Encoded {}x{} raster as {} bytes of JPEG", width, height, jpeg.len());

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => width,
            "Height" => height,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "DCTDecode",
        },
        jpeg,
    ));
    let resources_id = doc.add_object(dictionary! {
        "XObject" => dictionary! {
            "Im0" => image_id,
        },
    });

    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    Object::Integer(width),
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(height),
                    Object::Integer(0),
                    Object::Integer(0),
                ],
            ),
            Operation::new("Do", vec![Object::Name(IMAGE_NAME.to_vec())]),
            Operation::new("Q", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(width),
            Object::Integer(height),
        ],
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

pub fn page_count(bytes: &[u8]) -> Result<usize> {
    Ok(Document::load_mem(bytes)?.get_pages().len())
}
