//! Bootstrap 3 grid helpers and navigation bar components.
//!
//! The grid helpers return plain [`Div`]s with the grid classes set. The
//! navigation components build their whole subtree up front and extend it
//! later by looking up the list they own by id.
//!
//! ```ignore
//! use htmlgen_tags::bootstrap::{self, Navbar, NavbarDropdown};
//!
//! let grid = bootstrap::container().child(
//!     bootstrap::row()
//!         .child(bootstrap::column(8))
//!         .child(bootstrap::column(4)),
//! );
//!
//! let mut reports = NavbarDropdown::new("Reports");
//! reports.add_menu_item("Daily", "/daily")?;
//!
//! let mut nav = Navbar::new();
//! nav.add_brand(anchor("/", "Home"))?
//!     .add_active_entry(anchor("/status", "Status"), "nav-status")?
//!     .add_dropdown(reports, "nav-reports")?;
//! ```

use crate::builders::*;
use crate::widgets::anchor;
use htmlgen_core::{Element, ElementError};
use std::fmt;

/// Ids inside a [`Navbar`].
pub const NAV_CONTAINER_ID: &str = "nav_container";
pub const NAV_HEADER_ID: &str = "nav_header";
pub const MENU_PARENT_ID: &str = "menu_parent";
pub const MENU_LIST_ID: &str = "menu_list";
pub const MENU_LIST_RIGHT_ID: &str = "menu_list_right";

/// Id of the item list inside a [`NavbarDropdown`].
pub const DROPDOWN_LIST_ID: &str = "listing";

/// A fixed-width page container.
pub fn container() -> Div {
    Div::new().class("container")
}

/// A grid row.
pub fn row() -> Div {
    Div::new().class("row clearfix")
}

/// A grid column `width` units wide, out of twelve.
pub fn column(width: u8) -> Div {
    Div::new().class(format!("column col-md-{width}"))
}

/// Implements the element traits for a component wrapping a typed element
/// in its `root` field.
macro_rules! component {
    ($name:ident) => {
        impl Node for $name {
            fn element(&self) -> &Element {
                self.root.element()
            }

            fn element_mut(&mut self) -> &mut Element {
                self.root.element_mut()
            }
        }

        impl Widget for $name {}

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.html())
            }
        }
    };
}

/// The top navigation bar.
///
/// Holds a brand area and two menus, one aligned left and one right. Entries
/// are wrapped in an `<li>` carrying the given id.
#[derive(Debug, Clone)]
pub struct Navbar {
    root: Nav,
}

impl Navbar {
    pub fn new() -> Self {
        let menus = Div::new()
            .class("collapse navbar-collapse navbar-inverse")
            .id(MENU_PARENT_ID)
            .child(Ul::new().class("nav navbar-nav").id(MENU_LIST_ID))
            .child(
                Ul::new()
                    .class("nav navbar-nav navbar-right")
                    .id(MENU_LIST_RIGHT_ID),
            );
        let fluid = Div::new()
            .class("container-fluid")
            .id(NAV_CONTAINER_ID)
            .child(Div::new().class("navbar-header").id(NAV_HEADER_ID))
            .child(menus);
        let root = Nav::new()
            .class("navbar navbar-default")
            .role("navigation")
            .child(fluid);
        Self { root }
    }

    /// Adds an entry to the left menu.
    pub fn add_entry(
        &mut self,
        content: impl Into<Content>,
        id: &str,
    ) -> Result<&mut Self, ElementError> {
        self.extend(MENU_LIST_ID, Li::new().id(id).child(content))
    }

    /// Adds an entry to the right menu.
    pub fn add_entry_right(
        &mut self,
        content: impl Into<Content>,
        id: &str,
    ) -> Result<&mut Self, ElementError> {
        self.extend(MENU_LIST_RIGHT_ID, Li::new().id(id).child(content))
    }

    /// Adds an entry to the left menu, marked as the current one.
    pub fn add_active_entry(
        &mut self,
        content: impl Into<Content>,
        id: &str,
    ) -> Result<&mut Self, ElementError> {
        self.extend(
            MENU_LIST_ID,
            Li::new().id(id).class("active").child(content),
        )
    }

    /// Adds a dropdown to the left menu.
    pub fn add_dropdown(
        &mut self,
        dropdown: NavbarDropdown,
        id: &str,
    ) -> Result<&mut Self, ElementError> {
        self.extend(MENU_LIST_ID, dropdown.id(id))
    }

    /// Places `brand` in the header area. Its class is replaced with
    /// `navbar-brand`.
    pub fn add_brand<W: Widget + 'static>(&mut self, brand: W) -> Result<&mut Self, ElementError> {
        self.extend(NAV_HEADER_ID, brand.class("navbar-brand"))
    }

    fn extend(
        &mut self,
        target: &str,
        content: impl Into<Content>,
    ) -> Result<&mut Self, ElementError> {
        self.root
            .element_mut()
            .get_mut(target)?
            .element_mut()
            .add(content)?;
        Ok(self)
    }
}

impl Default for Navbar {
    fn default() -> Self {
        Self::new()
    }
}

component!(Navbar);

/// A dropdown menu for a [`Navbar`]: a toggle link labelled `name` and a
/// list of links.
#[derive(Debug, Clone)]
pub struct NavbarDropdown {
    root: Li,
}

impl NavbarDropdown {
    pub fn new(name: &str) -> Self {
        let toggle = Anchor::new()
            .href("#")
            .class("dropdown-toggle")
            .data("toggle", "dropdown")
            .child(Span::new().class("label label-info").text(name))
            .child(B::new().class("caret"));
        let root = Li::new()
            .class("dropdown")
            .child(toggle)
            .child(
                Ul::new()
                    .class("dropdown-menu")
                    .id(DROPDOWN_LIST_ID),
            );
        Self { root }
    }

    /// Appends a link to `target` labelled `name`.
    pub fn add_menu_item(&mut self, name: &str, target: &str) -> Result<&mut Self, ElementError> {
        self.root
            .element_mut()
            .get_mut(DROPDOWN_LIST_ID)?
            .element_mut()
            .add(Li::new().child(anchor(target, name)))?;
        Ok(self)
    }
}

component!(NavbarDropdown);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_class() {
        assert!(container().html().contains("class=\"container\""));
        assert_eq!(container().html(), "<div class=\"container\">\n</div>\n");
    }

    #[test]
    fn test_row_class() {
        assert!(row().html().contains("class=\"row clearfix\""));
    }

    #[test]
    fn test_column_width() {
        assert!(column(6).html().contains("class=\"column col-md-6\""));
    }

    #[test]
    fn test_grid_layout() {
        let grid = container().child(row().child(column(4)).child(column(4)).child(column(4)));
        let html = grid.html();
        assert!(html.contains("class=\"container\""));
        assert!(html.contains("class=\"row clearfix\""));
        assert_eq!(html.matches("class=\"column col-md-4\"").count(), 3);
        assert_eq!(grid.element().at(0).unwrap().len(), 3);
    }

    #[test]
    fn test_navbar_skeleton() {
        let nav = Navbar::new();
        for id in [
            NAV_CONTAINER_ID,
            NAV_HEADER_ID,
            MENU_PARENT_ID,
            MENU_LIST_ID,
            MENU_LIST_RIGHT_ID,
        ] {
            assert!(nav.exists(id), "missing {id}");
        }
        assert!(nav.html().starts_with(
            "<nav class=\"navbar navbar-default\" role=\"navigation\">\n\
             <div id=\"nav_container\" class=\"container-fluid\">\n\
             <div id=\"nav_header\" class=\"navbar-header\">\n</div>\n"
        ));
    }

    #[test]
    fn test_navbar_entries_land_in_their_menus() {
        let mut nav = Navbar::new();
        nav.add_entry(anchor("/a", "A"), "nav-a")
            .unwrap()
            .add_active_entry(anchor("/b", "B"), "nav-b")
            .unwrap()
            .add_entry_right("Signed in", "nav-user")
            .unwrap();

        let left = nav.get(MENU_LIST_ID).unwrap();
        assert_eq!(left.len(), 2);
        assert_eq!(
            left.element().at(1).unwrap().html(),
            "<li id=\"nav-b\" class=\"active\"><a href=\"/b\">B</a></li>\n"
        );
        let right = nav.get(MENU_LIST_RIGHT_ID).unwrap();
        assert_eq!(right.len(), 1);
        assert_eq!(right.element().at(0).unwrap().element().id(), "nav-user");
    }

    #[test]
    fn test_navbar_brand_class_is_replaced() {
        let mut nav = Navbar::new();
        nav.add_brand(anchor("/", "Home").class("logo")).unwrap();
        let header = nav.get(NAV_HEADER_ID).unwrap();
        assert_eq!(
            header.inner_html(),
            "<a class=\"navbar-brand\" href=\"/\">Home</a>"
        );
    }

    #[test]
    fn test_dropdown_items() {
        let mut reports = NavbarDropdown::new("Reports");
        reports
            .add_menu_item("Daily", "/daily")
            .unwrap()
            .add_menu_item("Weekly", "/weekly")
            .unwrap();
        assert_eq!(reports.get(DROPDOWN_LIST_ID).unwrap().len(), 2);
        assert_eq!(
            reports.html(),
            "<li class=\"dropdown\">\
             <a class=\"dropdown-toggle\" href=\"#\" data-toggle=\"dropdown\">\
             <span class=\"label label-info\">Reports</span><b class=\"caret\"></b></a>\
             <ul id=\"listing\" class=\"dropdown-menu\">\n\
             <li><a href=\"/daily\">Daily</a></li>\n\
             <li><a href=\"/weekly\">Weekly</a></li>\n\
             </ul>\n\
             </li>\n"
        );
    }

    #[test]
    fn test_dropdown_in_navbar_keeps_its_items() {
        let mut tools = NavbarDropdown::new("Tools");
        tools.add_menu_item("Export", "/export").unwrap();

        let mut nav = Navbar::new();
        nav.add_dropdown(tools, "nav-tools").unwrap();

        let item = nav.get("nav-tools").unwrap();
        assert!(item.is::<NavbarDropdown>());
        assert_eq!(item.element().class(), "dropdown");
        assert!(nav.html().contains("<li><a href=\"/export\">Export</a></li>\n"));
    }

    #[test]
    fn test_missing_target_is_reported() {
        let mut dropdown = NavbarDropdown::new("Empty");
        dropdown.element_mut().clear();
        assert_eq!(
            dropdown.add_menu_item("x", "/x").unwrap_err(),
            ElementError::IdNotFound(DROPDOWN_LIST_ID.to_string())
        );
    }
}
