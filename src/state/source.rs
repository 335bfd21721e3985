// Which bytes the viewer shows. Switching never touches the transform.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Initial,
    User,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImageSources {
    initial: String,
    user_url: Option<String>,
    selected: SourceKind,
}

impl ImageSources {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            user_url: None,
            selected: SourceKind::Initial,
        }
    }

    pub fn selected(&self) -> SourceKind {
        self.selected
    }

    pub fn user_url(&self) -> Option<&str> {
        self.user_url.as_deref()
    }

    pub fn current_src(&self) -> &str {
        match (self.selected, &self.user_url) {
            (SourceKind::User, Some(url)) => url,
            _ => &self.initial,
        }
    }

    pub fn select_initial(&mut self) -> bool {
        let before = self.selected;
        self.selected = SourceKind::Initial;
        before != self.selected
    }

    /// Falls back to the initial image when nothing was ever chosen.
    pub fn select_user(&mut self) -> bool {
        let before = self.selected;
        if self.user_url.is_some() {
            self.selected = SourceKind::User;
        } else {
            self.selected = SourceKind::Initial;
        }
        before != self.selected
    }

    /// Stores a freshly chosen image and shows it. Releasing the previous
    /// URL is up to the browser glue.
    pub fn set_user_image(&mut self, url: impl Into<String>) {
        self.selected = SourceKind::User;
        self.user_url = Some(url.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_selection_falls_back_to_initial() {
        let mut s = ImageSources::new("images/sample1.jpg");
        assert!(!s.select_user());
        assert_eq!(s.selected(), SourceKind::Initial);
        assert_eq!(s.current_src(), "images/sample1.jpg");
    }

    #[test]
    fn chosen_image_replaces_previous() {
        let mut s = ImageSources::new("a.jpg");
        s.set_user_image("blob:one");
        assert_eq!(s.current_src(), "blob:one");
        s.set_user_image("blob:two");
        assert_eq!(s.user_url(), Some("blob:two"));
        assert!(s.select_initial());
        assert_eq!(s.current_src(), "a.jpg");
        assert!(s.select_user());
        assert_eq!(s.current_src(), "blob:two");
    }
}
