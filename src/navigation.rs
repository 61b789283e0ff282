/// A jump link in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub id: &'static str,
}

/// Anchor the brand button scrolls to.
pub const HERO_ANCHOR: &str = "hero";
pub const ABOUT_ANCHOR: &str = "about";
pub const SKILLS_ANCHOR: &str = "skills";
pub const EXPERIENCE_ANCHOR: &str = "experience";
pub const CONTACT_ANCHOR: &str = "contact";

pub static NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "About",
        id: ABOUT_ANCHOR,
    },
    NavLink {
        label: "Skills",
        id: SKILLS_ANCHOR,
    },
    NavLink {
        label: "Experience",
        id: EXPERIENCE_ANCHOR,
    },
    NavLink {
        label: "Contact",
        id: CONTACT_ANCHOR,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Navigation,
    Hero,
    About,
    Skills,
    Experience,
    Contact,
}

/// Mount order of the page, top to bottom.
pub const SECTION_ORDER: [Section; 6] = [
    Section::Navigation,
    Section::Hero,
    Section::About,
    Section::Skills,
    Section::Experience,
    Section::Contact,
];

impl Section {
    /// Element id the section renders with. The header has none.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            Section::Navigation => None,
            Section::Hero => Some(HERO_ANCHOR),
            Section::About => Some(ABOUT_ANCHOR),
            Section::Skills => Some(SKILLS_ANCHOR),
            Section::Experience => Some(EXPERIENCE_ANCHOR),
            Section::Contact => Some(CONTACT_ANCHOR),
        }
    }
}

/// Collapsed menu state for narrow layouts. Only user actions change it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Menu {
    open: bool,
}

impl Menu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Something that can smooth-scroll the page to an element id.
pub trait ScrollHost {
    /// Returns false, without scrolling, when no element has that id.
    fn scroll_to_anchor(&self, id: &str) -> bool;
}

/// Link click: always closes the menu, then scrolls if the anchor exists.
pub fn follow_link(menu: &mut Menu, host: &impl ScrollHost, id: &str) -> bool {
    menu.close();
    let found = host.scroll_to_anchor(id);
    if !found {
        log::debug!("no anchor with id {id}, not scrolling");
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;

    /// Page with anchors at fixed document offsets. Scrolling lands the
    /// anchor's top on the viewport top, the end state of a smooth scroll.
    struct FakePage {
        anchors: HashMap<&'static str, f64>,
        scroll_y: Cell<f64>,
    }

    impl FakePage {
        fn new() -> Self {
            let anchors = SECTION_ORDER
                .iter()
                .filter_map(|s| s.anchor())
                .enumerate()
                .map(|(i, id)| (id, i as f64 * 900.0))
                .collect();
            Self {
                anchors,
                scroll_y: Cell::new(0.0),
            }
        }

        fn anchor_top_in_viewport(&self, id: &str) -> f64 {
            self.anchors[id] - self.scroll_y.get()
        }
    }

    impl ScrollHost for FakePage {
        fn scroll_to_anchor(&self, id: &str) -> bool {
            match self.anchors.get(id) {
                Some(top) => {
                    self.scroll_y.set(*top);
                    true
                }
                None => false,
            }
        }
    }

    #[test]
    fn test_contact_link_from_open_mobile_menu() {
        let page = FakePage::new();
        let mut menu = Menu::default();
        menu.toggle();
        assert!(menu.is_open());

        assert!(follow_link(&mut menu, &page, CONTACT_ANCHOR));
        assert!(!menu.is_open());
        assert_eq!(page.anchor_top_in_viewport(CONTACT_ANCHOR), 0.0);
    }

    #[test]
    fn test_link_closes_already_closed_menu() {
        let page = FakePage::new();
        let mut menu = Menu::default();
        assert!(follow_link(&mut menu, &page, SKILLS_ANCHOR));
        assert!(!menu.is_open());
        assert_eq!(page.anchor_top_in_viewport(SKILLS_ANCHOR), 0.0);
    }

    #[test]
    fn test_missing_anchor_is_noop() {
        let page = FakePage::new();
        page.scroll_to_anchor(ABOUT_ANCHOR);
        let before = page.scroll_y.get();

        let mut menu = Menu::default();
        menu.toggle();
        assert!(!follow_link(&mut menu, &page, "blog"));
        assert_eq!(page.scroll_y.get(), before);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_menu_toggle() {
        let mut menu = Menu::default();
        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_section_order() {
        assert_eq!(SECTION_ORDER[0], Section::Navigation);
        let anchors: Vec<_> = SECTION_ORDER.iter().filter_map(|s| s.anchor()).collect();
        assert_eq!(
            anchors,
            ["hero", "about", "skills", "experience", "contact"]
        );
        // header links follow page order
        let links: Vec<_> = NAV_LINKS.iter().map(|l| l.id).collect();
        assert_eq!(links, anchors[1..]);
    }

    #[test]
    fn test_every_link_targets_a_rendered_section() {
        let rendered: Vec<_> = SECTION_ORDER.iter().filter_map(|s| s.anchor()).collect();
        for link in NAV_LINKS.iter() {
            assert!(rendered.contains(&link.id), "{} has no section", link.id);
        }
        assert!(rendered.contains(&HERO_ANCHOR));

        let page = FakePage::new();
        let mut menu = Menu::default();
        for link in NAV_LINKS.iter() {
            assert!(follow_link(&mut menu, &page, link.id));
            assert_eq!(page.anchor_top_in_viewport(link.id), 0.0);
        }
    }
}
