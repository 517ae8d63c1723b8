use crate::content::{PageContext, font_resource_name};
use crate::error::RenderError;
use cheatsheet_layout::{Page, StandardFont};
use cheatsheet_types::PageGeometry;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};
use std::io::Write;

const PDF_VERSION: &str = "1.7";
const PRODUCER: &str = "cheatsheet";
/// CMap that maps UCS-2 codes to Adobe-Japan1 CIDs.
const CID_ENCODING: &str = "UniJIS-UCS2-H";

/// Writes laid-out pages to a PDF. Fonts are referenced by name only: the
/// base-14 Latin faces and a standard Japanese CID font.
pub struct LopdfRenderer {
    title: String,
    geometry: PageGeometry,
}

impl LopdfRenderer {
    pub fn new(title: impl Into<String>, geometry: PageGeometry) -> Self {
        Self { title: title.into(), geometry }
    }

    /// Builds the PDF document object for `pages`.
    pub fn build_document(&self, pages: &[Page]) -> Result<Document, RenderError> {
        let mut doc = Document::with_version(PDF_VERSION);
        let pages_id = doc.new_object_id();
        let fonts = font_dictionary(&mut doc);
        let resources_id = doc.add_object(dictionary! { "Font" => fonts });

        let page_width = self.geometry.page_size.width;
        let page_height = self.geometry.page_size.height;

        let mut page_ids: Vec<ObjectId> = Vec::with_capacity(pages.len());
        for page in pages {
            let mut ctx = PageContext::new(page_height);
            for el in &page.elements {
                ctx.draw_element(el);
            }
            let content = ctx.finish().encode()?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, content));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            page_ids.push(page_id);
        }

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => page_ids.len() as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![Object::Integer(0), Object::Integer(0), page_width.into(), page_height.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = doc.add_object(dictionary! {
            "Title" => text_string(&self.title),
            "Producer" => Object::string_literal(PRODUCER),
        });
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);
        Ok(doc)
    }

    /// Renders `pages` and writes the PDF to `writer`.
    pub fn render<W: Write>(&self, pages: &[Page], writer: &mut W) -> Result<(), RenderError> {
        let mut doc = self.build_document(pages)?;
        doc.save_to(writer).map_err(|e| RenderError::Pdf(e.to_string()))?;
        log::info!("Rendered {} pages", pages.len());
        Ok(())
    }

    pub fn render_to_vec(&self, pages: &[Page]) -> Result<Vec<u8>, RenderError> {
        let mut bytes = Vec::new();
        self.render(pages, &mut bytes)?;
        Ok(bytes)
    }
}

fn font_dictionary(doc: &mut Document) -> Dictionary {
    let mut fonts = Dictionary::new();
    for font in StandardFont::ALL {
        let entry = if font.is_cid() {
            cid_font(doc, font)
        } else {
            dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            }
        };
        fonts.set(font_resource_name(font), entry);
    }
    fonts
}

/// A non-embedded Type0 font over an Adobe-Japan1 CIDFontType0 descendant.
/// Metrics are those of HeiseiKakuGo-W5.
fn cid_font(doc: &mut Document, font: StandardFont) -> Dictionary {
    let integers = |values: &[i64]| values.iter().map(|v| Object::Integer(*v)).collect::<Vec<Object>>();

    let descriptor_id = doc.add_object(dictionary! {
        "Type" => "FontDescriptor",
        "FontName" => font.postscript_name(),
        "Flags" => Object::Integer(4),
        "FontBBox" => integers(&[-92, -250, 1010, 922]),
        "ItalicAngle" => Object::Integer(0),
        "Ascent" => Object::Integer(752),
        "Descent" => Object::Integer(-221),
        "CapHeight" => Object::Integer(737),
        "StemV" => Object::Integer(114),
    });
    let descendant_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "CIDFontType0",
        "BaseFont" => font.postscript_name(),
        "CIDSystemInfo" => dictionary! {
            "Registry" => Object::string_literal("Adobe"),
            "Ordering" => Object::string_literal("Japan1"),
            "Supplement" => Object::Integer(2),
        },
        "FontDescriptor" => descriptor_id,
        "DW" => Object::Integer(1000),
        // Proportional Latin and half-width katakana CIDs.
        "W" => integers(&[1, 95, 500, 231, 632, 500]),
    });

    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type0",
        "BaseFont" => Object::Name(format!("{}-{}", font.postscript_name(), CID_ENCODING).into_bytes()),
        "Encoding" => CID_ENCODING,
        "DescendantFonts" => vec![Object::Reference(descendant_id)],
    }
}

/// A PDF text string: literal for ASCII, UTF-16BE with a byte order mark otherwise.
fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::string_literal(text);
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cheatsheet_layout::{ContentBlock, Paginator, TableBlock};
    use lopdf::content::Content;
    use cheatsheet_types::LayoutConfig;

    fn rendered(blocks: &[ContentBlock], config: &LayoutConfig) -> (usize, Document) {
        rendered_with_title("Test Sheet", blocks, config)
    }

    fn rendered_with_title(title: &str, blocks: &[ContentBlock], config: &LayoutConfig) -> (usize, Document) {
        let paginator = Paginator::new(config).unwrap();
        let pages = paginator.paginate(blocks);
        let renderer = LopdfRenderer::new(title, paginator.geometry());
        let bytes = renderer.render_to_vec(&pages).unwrap();
        (pages.len(), Document::load_mem(&bytes).unwrap())
    }

    #[test]
    fn test_renders_loadable_pdf() {
        let blocks = vec![
            ContentBlock::Title("Test Sheet".into()),
            ContentBlock::SectionHeader("EDIT".into()),
            ContentBlock::Table(TableBlock {
                rows: vec![("Ctrl+C".into(), "Copy (text)".into())],
                column_widths: [50.0, 90.0],
            }),
        ];
        let (page_count, doc) = rendered(&blocks, &LayoutConfig::default());
        assert_eq!(page_count, 1);
        assert_eq!(doc.get_pages().len(), 1);

        let page_id = doc.get_pages()[&1];
        let content = doc.get_page_content(page_id).unwrap();
        let text = String::from_utf8_lossy(&content);
        assert!(text.contains("Ctrl+C"));
        assert!(text.contains("EDIT"));
    }

    #[test]
    fn test_page_count_matches_pagination() {
        let config = LayoutConfig { columns: 1, ..LayoutConfig::default() };
        let rows = (0..200).map(|i| (format!("K{}", i), "desc".to_string())).collect();
        let blocks = vec![ContentBlock::Table(TableBlock { rows, column_widths: [100.0, 200.0] })];
        let (page_count, doc) = rendered(&blocks, &config);
        assert!(page_count > 1);
        assert_eq!(doc.get_pages().len(), page_count);
    }

    #[test]
    fn test_landscape_media_box() {
        let (_, doc) = rendered(&[], &LayoutConfig::default());
        let page_id = doc.get_pages()[&1];
        let media_box = doc
            .get_dictionary(page_id)
            .and_then(|page| page.get(b"Parent"))
            .and_then(Object::as_reference)
            .and_then(|parent| doc.get_dictionary(parent))
            .and_then(|pages| pages.get(b"MediaBox"))
            .and_then(Object::as_array)
            .unwrap()
            .clone();
        let width = media_box[2].as_float().unwrap();
        let height = media_box[3].as_float().unwrap();
        assert!(width > height);
    }

    fn page_font(doc: &Document, resource: &[u8]) -> Dictionary {
        let page_id = doc.get_pages()[&1];
        let pages_id = doc
            .get_dictionary(page_id)
            .and_then(|page| page.get(b"Parent"))
            .and_then(Object::as_reference)
            .unwrap();
        let resources_id = doc
            .get_dictionary(pages_id)
            .and_then(|pages| pages.get(b"Resources"))
            .and_then(Object::as_reference)
            .unwrap();
        doc.get_dictionary(resources_id)
            .and_then(|resources| resources.get(b"Font"))
            .and_then(Object::as_dict)
            .and_then(|fonts| fonts.get(resource))
            .and_then(Object::as_dict)
            .unwrap()
            .clone()
    }

    #[test]
    fn test_japanese_text_uses_cid_font() {
        let blocks = vec![ContentBlock::Table(TableBlock {
            rows: vec![("Ctrl+C".into(), "コピー".into())],
            column_widths: [50.0, 90.0],
        })];
        let (_, doc) = rendered(&blocks, &LayoutConfig::default());

        let font = page_font(&doc, b"F5");
        assert_eq!(font.get(b"Subtype").and_then(Object::as_name).unwrap(), b"Type0");
        assert_eq!(
            font.get(b"BaseFont").and_then(Object::as_name).unwrap(),
            b"HeiseiKakuGo-W5-UniJIS-UCS2-H"
        );
        assert_eq!(font.get(b"Encoding").and_then(Object::as_name).unwrap(), b"UniJIS-UCS2-H");

        let descendant_id = font
            .get(b"DescendantFonts")
            .and_then(Object::as_array)
            .and_then(|fonts| fonts[0].as_reference())
            .unwrap();
        let descendant = doc.get_dictionary(descendant_id).unwrap();
        assert_eq!(descendant.get(b"Subtype").and_then(Object::as_name).unwrap(), b"CIDFontType0");
        let ordering = descendant
            .get(b"CIDSystemInfo")
            .and_then(Object::as_dict)
            .and_then(|info| info.get(b"Ordering"))
            .and_then(Object::as_str)
            .unwrap();
        assert_eq!(ordering, b"Japan1");

        let page_id = doc.get_pages()[&1];
        let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
        let drawn: Vec<(Vec<u8>, Vec<u8>)> = content
            .operations
            .iter()
            .filter(|op| op.operator == "Tf")
            .map(|op| op.operands[0].as_name().unwrap().to_vec())
            .zip(
                content
                    .operations
                    .iter()
                    .filter(|op| op.operator == "Tj")
                    .map(|op| op.operands[0].as_str().unwrap().to_vec()),
            )
            .collect();
        assert_eq!(
            drawn,
            vec![
                (b"F4".to_vec(), b"Ctrl+C".to_vec()),
                (b"F5".to_vec(), vec![0x30, 0xB3, 0x30, 0xD4, 0x30, 0xFC]),
            ]
        );
    }

    #[test]
    fn test_non_ascii_title_is_utf16() {
        let (_, doc) = rendered_with_title("ショートカット", &[], &LayoutConfig::default());
        let info = doc.trailer.get(b"Info").and_then(Object::as_reference).unwrap();
        let title = doc
            .get_dictionary(info)
            .and_then(|info| info.get(b"Title"))
            .and_then(Object::as_str)
            .unwrap();
        assert_eq!(&title[..4], &[0xFE, 0xFF, 0x30, 0xB7]);
    }
}
