//! Stylesheets compiled into the binary.

macro_rules! embed_css {
    ($name:expr, $path:expr) => {
        (
            $name,
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/styles/", $path)),
        )
    };
}

const STYLES: &[(&str, &str)] = &[
    embed_css!("base", "pages/base.css"),
    embed_css!("back_button", "components/back_button.css"),
    embed_css!("input_modal", "components/input_modal.css"),
];

pub struct ResourceLoader;

impl ResourceLoader {
    pub fn get_css(name: &str) -> &'static str {
        STYLES
            .iter()
            .find(|(style, _)| *style == name)
            .map_or("", |&(_, css)| css)
    }

    /// Page styles plus the components every page shows. The modal
    /// brings its own sheet when it opens.
    pub fn shell_css() -> String {
        ["base", "back_button"]
            .into_iter()
            .map(Self::get_css)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
