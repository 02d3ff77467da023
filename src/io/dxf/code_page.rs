//! `$DWGCODEPAGE` handling.
//!
//! Drawings older than AutoCAD 2007 store text in the code page named by the
//! header. Lines that are not valid UTF-8 are decoded with that code page,
//! or byte-for-byte as Latin-1 when none is known.

use encoding_rs::Encoding;

/// Code page names (lower case) and the encoding used for each
static CODE_PAGES: &[(&[&str], &Encoding)] = &[
    (&["ansi_874"], encoding_rs::WINDOWS_874),
    (&["ansi_932"], encoding_rs::SHIFT_JIS),
    (&["ansi_936", "gb2312"], encoding_rs::GBK),
    (&["ansi_949", "korean", "johab"], encoding_rs::EUC_KR),
    (&["ansi_950", "big5"], encoding_rs::BIG5),
    (&["ansi_1250", "dos852"], encoding_rs::WINDOWS_1250),
    (&["ansi_1251"], encoding_rs::WINDOWS_1251),
    (
        &["ansi_1252", "dos437", "dos850", "dos860", "dos861", "dos863", "dos865", "iso8859-1"],
        encoding_rs::WINDOWS_1252,
    ),
    (&["ansi_1253", "dos869"], encoding_rs::WINDOWS_1253),
    (&["ansi_1254", "dos857", "iso8859-9"], encoding_rs::WINDOWS_1254),
    (&["ansi_1255"], encoding_rs::WINDOWS_1255),
    (&["ansi_1256"], encoding_rs::WINDOWS_1256),
    (&["ansi_1257"], encoding_rs::WINDOWS_1257),
    (&["ansi_1258"], encoding_rs::WINDOWS_1258),
    (&["dos855", "dos866"], encoding_rs::IBM866),
    (&["iso8859-2"], encoding_rs::ISO_8859_2),
    (&["iso8859-5"], encoding_rs::ISO_8859_5),
    (&["iso8859-7"], encoding_rs::ISO_8859_7),
    (&["iso8859-15"], encoding_rs::ISO_8859_15),
    (&["koi8-r"], encoding_rs::KOI8_R),
    (&["koi8-u"], encoding_rs::KOI8_U),
];

/// Encoding for a `$DWGCODEPAGE` value.
///
/// Returns `None` for UTF-8/ASCII code pages. Unrecognized names fall back
/// to Windows-1252.
pub fn encoding_from_code_page(code_page: &str) -> Option<&'static Encoding> {
    let name = code_page.trim().to_ascii_lowercase().replace("iso_", "iso");
    if matches!(name.as_str(), "ascii" | "utf-8" | "utf8" | "unicode") {
        return None;
    }

    CODE_PAGES
        .iter()
        .find(|(names, _)| names.contains(&name.as_str()))
        .map(|(_, enc)| *enc)
        .or(Some(encoding_rs::WINDOWS_1252))
}

/// Decode raw bytes of one value, trying UTF-8 first
pub fn decode(bytes: &[u8], encoding: Option<&'static Encoding>) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => match encoding {
            Some(enc) => enc.decode_without_bom_handling(bytes).0.into_owned(),
            None => bytes.iter().map(|&b| b as char).collect(),
        },
    }
}
