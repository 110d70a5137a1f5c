use snaptext_core::{TableView, TextMarkers};
use snaptext_logging::snaptext_info;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlImageElement, HtmlInputElement,
    HtmlTableSectionElement, HtmlTextAreaElement, Url,
};

use super::js_error;
use crate::constants::*;
use crate::{Dom, DomCommand, PlatformError};

/// The seven page elements, looked up once at start-up.
pub(crate) struct BrowserDom {
    document: Document,
    pub(crate) file_input: HtmlInputElement,
    pub(crate) reset_button: HtmlButtonElement,
    pub(crate) copy_button: HtmlButtonElement,
    pub(crate) download_button: HtmlButtonElement,
    preview: HtmlImageElement,
    text_area: HtmlTextAreaElement,
    table_body: HtmlTableSectionElement,
}

impl BrowserDom {
    pub(crate) fn lookup(document: &Document) -> Result<Self, PlatformError> {
        let table_selector = format!("#{TABLE_KV} tbody");
        let table_body = document
            .query_selector(&table_selector)
            .map_err(js_error)?
            .ok_or(PlatformError::MissingElement("kvTable tbody"))?
            .dyn_into::<HtmlTableSectionElement>()
            .map_err(|_| PlatformError::WrongElementType {
                id: TABLE_KV,
                expected: "table with a tbody",
            })?;

        Ok(Self {
            document: document.clone(),
            file_input: element(document, INPUT_IMAGE, "file input")?,
            reset_button: element(document, BUTTON_RESET, "button")?,
            copy_button: element(document, BUTTON_COPY, "button")?,
            download_button: element(document, BUTTON_DOWNLOAD, "button")?,
            preview: element(document, IMAGE_PREVIEW, "image")?,
            text_area: element(document, TEXT_EXTRACTED, "textarea")?,
            table_body,
        })
    }

    fn set_markers(&self, markers: TextMarkers) -> Result<(), PlatformError> {
        let classes = self.text_area.class_list();
        for (class, active) in markers.classes() {
            classes.toggle_with_force(class, active).map_err(js_error)?;
        }
        Ok(())
    }

    // Object URLs pin their blob until revoked.
    fn release_preview(&self) -> Result<(), PlatformError> {
        let current = self.preview.src();
        if current.starts_with("blob:") {
            Url::revoke_object_url(&current).map_err(js_error)?;
        }
        Ok(())
    }

    fn replace_table(&self, table: &TableView) -> Result<(), PlatformError> {
        self.table_body.set_inner_html("");
        match table {
            TableView::Empty => {}
            TableView::Rows(pairs) => {
                for pair in pairs {
                    let row = self.document.create_element("tr").map_err(js_error)?;
                    row.append_child(&self.cell(&pair.key)?).map_err(js_error)?;
                    row.append_child(&self.cell(&pair.value)?)
                        .map_err(js_error)?;
                    self.table_body.append_child(&row).map_err(js_error)?;
                }
            }
            TableView::Placeholder(kind) => {
                let row = self.document.create_element("tr").map_err(js_error)?;
                if let Some(class) = kind.row_class() {
                    row.set_class_name(class);
                }
                let cell = self.cell(kind.label())?;
                cell.set_attribute("colspan", "2").map_err(js_error)?;
                row.append_child(&cell).map_err(js_error)?;
                self.table_body.append_child(&row).map_err(js_error)?;
            }
        }
        Ok(())
    }

    // Text content, never markup: values come straight from the server.
    fn cell(&self, text: &str) -> Result<Element, PlatformError> {
        let cell = self.document.create_element("td").map_err(js_error)?;
        cell.set_text_content(Some(text));
        Ok(cell)
    }

    fn buttons(&self) -> [&HtmlButtonElement; 3] {
        [&self.reset_button, &self.copy_button, &self.download_button]
    }
}

impl Dom for BrowserDom {
    fn apply(&mut self, command: DomCommand) -> Result<(), PlatformError> {
        match command {
            DomCommand::SetText(text) => self.text_area.set_value(&text),
            DomCommand::SetTextMarkers(markers) => self.set_markers(markers)?,
            DomCommand::ReplaceTable(table) => self.replace_table(&table)?,
            DomCommand::SetPreview(Some(src)) => {
                self.release_preview()?;
                self.preview.set_src(&src);
            }
            DomCommand::SetPreview(None) => {
                self.release_preview()?;
                self.preview.remove_attribute("src").map_err(js_error)?
            }
            DomCommand::SetControlsEnabled(enabled) => {
                for button in self.buttons() {
                    button.set_disabled(!enabled);
                }
            }
            DomCommand::ClearFileInput => self.file_input.set_value(""),
        }
        Ok(())
    }

    fn text_value(&self) -> String {
        self.text_area.value()
    }
}

fn element<T: JsCast>(
    document: &Document,
    id: &'static str,
    expected: &'static str,
) -> Result<T, PlatformError> {
    let found = document
        .get_element_by_id(id)
        .ok_or(PlatformError::MissingElement(id))?;
    snaptext_info!("Element {} found", id);
    found
        .dyn_into::<T>()
        .map_err(|_| PlatformError::WrongElementType { id, expected })
}
