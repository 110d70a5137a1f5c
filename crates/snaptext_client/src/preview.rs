use base64::Engine;
use snaptext_core::SelectedFile;

const FALLBACK_MIME: &str = "application/octet-stream";

/// Encodes the file as a `data:` URL suitable for an `<img src>`.
pub fn encode_data_url(file: &SelectedFile) -> String {
    let mime = if file.mime.is_empty() {
        FALLBACK_MIME
    } else {
        file.mime.as_str()
    };
    let encoded = base64::engine::general_purpose::STANDARD.encode(&file.bytes);
    format!("data:{mime};base64,{encoded}")
}

#[cfg(test)]
mod tests {
    use super::encode_data_url;
    use snaptext_core::SelectedFile;

    #[test]
    fn png_is_encoded_with_its_mime() {
        let file = SelectedFile::new("a.png", "image/png", b"hi".to_vec());
        assert_eq!(encode_data_url(&file), "data:image/png;base64,aGk=");
    }

    #[test]
    fn missing_mime_falls_back_to_octet_stream() {
        let file = SelectedFile::new("blob", "", Vec::new());
        assert_eq!(encode_data_url(&file), "data:application/octet-stream;base64,");
    }
}
