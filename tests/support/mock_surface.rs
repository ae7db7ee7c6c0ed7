use tag_field::TextEditSurface;

#[derive(Default, Debug, Clone)]
pub struct MockSurface {
    pub text: String,
    pub placeholder: Option<String>,
    pub visible: bool,
}

impl MockSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextEditSurface for MockSurface {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_placeholder(&mut self, placeholder: Option<&str>) {
        self.placeholder = placeholder.map(str::to_string);
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
