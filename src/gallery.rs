//! A click-through image gallery.
//!
//! [`ImageRotator`] renders a table holding Back / Next buttons above one
//! image. A small inline script swaps the image source; no library is
//! required.

use crate::error::GalleryError;
use htmlgen_tags::builders::*;

/// The `name` of the swapped `<img>`, used by the script to find it.
pub const SLIDER_NAME: &str = "photoslider";

#[derive(Debug, Clone, Default)]
pub struct ImageRotator {
    images: Vec<String>,
}

impl ImageRotator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an image. The first one added is shown initially.
    pub fn add_image(&mut self, file: impl Into<String>) {
        self.images.push(file.into());
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Builds the gallery markup.
    ///
    /// # Errors
    ///
    /// [`GalleryError::NoImages`] when no image has been added.
    pub fn node(&self) -> Result<Table, GalleryError> {
        let Some(first) = self.images.first() else {
            return Err(GalleryError::NoImages);
        };
        let photos = serde_json::to_string(&self.images)?;
        let script = format!(
            "var photos = {photos};\n\
             var which = 0;\n\
             function backward() {{\n\
             \x20   if (which > 0) {{ which--; document.images.{SLIDER_NAME}.src = photos[which]; }}\n\
             }}\n\
             function forward() {{\n\
             \x20   if (which < photos.length - 1) {{ which++; document.images.{SLIDER_NAME}.src = photos[which]; }}\n\
             }}"
        );

        let controls = P::new()
            .child(Script::new().code(script))
            .child(button("&lt;&lt; Back", "B2", "backward()"))
            .text(" ")
            .child(button("Next &gt;&gt;", "B1", "forward()"))
            .child(Br::new())
            .child(
                Anchor::new()
                    .href("#")
                    .attr("onclick", "which = 1; backward(); return false")
                    .child(Small::new().text("Start Over")),
            );
        let form = Form::new()
            .method("POST")
            .attr("name", "rotator")
            .child(Div::new().attr("align", "center").child(controls));

        log::debug!("Built image rotator with {} images", self.images.len());
        Ok(Table::new()
            .attr("border", "0")
            .attr("cellpadding", "0")
            .child(Tr::new().child(Td::new().width("100%").child(form)))
            .child(
                Tr::new().child(
                    Td::new()
                        .width("100%")
                        .child(Img::new().src(first.as_str()).attr("name", SLIDER_NAME)),
                ),
            ))
    }
}

fn button(label: &str, name: &str, onclick: &str) -> Input {
    Input::new()
        .type_("button")
        .value(label)
        .name(name)
        .attr("onclick", onclick)
}
