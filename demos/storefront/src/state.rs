//! Storefront state
//!
//! Everything the host owns: the catalogue, the filter values that the
//! controlled widgets mirror, and what is currently shown on top (dialog,
//! toast).

use platter::{Slide, ToastVariant};

/// A restaurant card
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub name: &'static str,
    pub cuisine: &'static str,
    pub rating: f32,
    /// Upper bound of the advertised delivery window
    pub delivery_minutes: u16,
    pub cost_for_two: u32,
    pub eco_friendly: bool,
    pub offer: Option<&'static str>,
}

impl Restaurant {
    const fn new(
        name: &'static str,
        cuisine: &'static str,
        rating: f32,
        delivery_minutes: u16,
        cost_for_two: u32,
    ) -> Self {
        Self {
            name,
            cuisine,
            rating,
            delivery_minutes,
            cost_for_two,
            eco_friendly: false,
            offer: None,
        }
    }

    const fn eco(mut self) -> Self {
        self.eco_friendly = true;
        self
    }

    const fn offer(mut self, offer: &'static str) -> Self {
        self.offer = Some(offer);
        self
    }

    fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.name.to_lowercase().contains(&query)
            || self.cuisine.to_lowercase().contains(&query)
    }
}

/// Restaurants on the home screen
pub fn catalogue() -> Vec<Restaurant> {
    vec![
        Restaurant::new("Biryani House", "Indian", 4.5, 30, 400)
            .eco()
            .offer("Flat 20% OFF"),
        Restaurant::new("Tandoori Treats", "Indian", 4.2, 35, 600).eco(),
        Restaurant::new("Masala Kitchen", "Indian", 4.6, 35, 600),
        Restaurant::new("Pizza Mania", "Italian", 4.4, 25, 500)
            .eco()
            .offer("Buy 1 Get 1 Free"),
        Restaurant::new("Pasta Corner", "Italian", 4.4, 30, 450).eco(),
        Restaurant::new("Dragon Wok", "Chinese", 4.1, 30, 450),
        Restaurant::new("Sushi Master", "Japanese", 4.6, 40, 800),
        Restaurant::new("Taco Fiesta", "Mexican", 4.2, 25, 350),
        Restaurant::new("Burger Hub", "Fast Food", 4.3, 25, 350),
        Restaurant::new("Sweet Cravings", "Desserts", 4.6, 30, 300),
        Restaurant::new("The Coffee Lounge", "Beverages", 4.5, 20, 250),
        Restaurant::new("Chaat Street", "Street Food", 4.0, 20, 200).eco(),
    ]
}

/// Offers shown in the carousel
pub fn offer_slides() -> Vec<Slide> {
    vec![
        Slide::new("Weekend Special", "50% OFF on orders above ₹299 · WEEKEND50"),
        Slide::new("First Order", "Flat ₹100 OFF on your first order · WELCOME100"),
        Slide::new("Free Delivery", "No delivery fee on orders above ₹199"),
    ]
}

/// Sort order for the restaurant list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Relevance,
    Rating,
    DeliveryTime,
    Cost,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Relevance,
        SortKey::Rating,
        SortKey::DeliveryTime,
        SortKey::Cost,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::Rating => "Rating",
            SortKey::DeliveryTime => "Delivery time",
            SortKey::Cost => "Cost for two",
        }
    }

    /// Sort key at a menu index; out-of-range indices keep relevance order
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }
}

/// Items of the account menu
pub const ACCOUNT_ITEMS: [&str; 3] = ["Profile", "Orders", "Sign out"];

/// Index of "Sign out" in [`ACCOUNT_ITEMS`]
pub const SIGN_OUT_INDEX: usize = 2;

/// Widget that receives keyboard input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Search,
    EcoSwitch,
    Sort,
    Carousel,
    Account,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Search => Focus::EcoSwitch,
            Focus::EcoSwitch => Focus::Sort,
            Focus::Sort => Focus::Carousel,
            Focus::Carousel => Focus::Account,
            Focus::Account => Focus::Search,
        }
    }
}

/// A toast the host is currently showing
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

impl Notice {
    pub fn info(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: ToastVariant::Default,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            variant: ToastVariant::Destructive,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub restaurants: Vec<Restaurant>,
    pub query: String,
    pub eco_only: bool,
    pub sort: SortKey,
    pub focus: Focus,
    pub sign_out_open: bool,
    pub signed_in: bool,
    pub toast: Option<Notice>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(catalogue())
    }
}

impl AppState {
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self {
            restaurants,
            query: String::new(),
            eco_only: false,
            sort: SortKey::default(),
            focus: Focus::default(),
            sign_out_open: false,
            signed_in: true,
            toast: None,
        }
    }

    /// Restaurants passing the search and filters, in the chosen order
    pub fn visible(&self) -> Vec<&Restaurant> {
        let mut list: Vec<&Restaurant> = self
            .restaurants
            .iter()
            .filter(|r| r.matches(&self.query))
            .filter(|r| !self.eco_only || r.eco_friendly)
            .collect();

        match self.sort {
            SortKey::Relevance => {}
            SortKey::Rating => list.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortKey::DeliveryTime => list.sort_by_key(|r| r.delivery_minutes),
            SortKey::Cost => list.sort_by_key(|r| r.cost_for_two),
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_matches_name_or_cuisine() {
        let state = AppState {
            query: "ital".into(),
            ..AppState::default()
        };
        let names: Vec<_> = state.visible().iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Pizza Mania", "Pasta Corner"]);
    }

    #[test]
    fn test_eco_filter() {
        let state = AppState {
            eco_only: true,
            ..AppState::default()
        };
        assert!(state.visible().iter().all(|r| r.eco_friendly));
        assert_eq!(state.visible().len(), 5);
    }

    #[test]
    fn test_sort_by_cost() {
        let state = AppState {
            sort: SortKey::Cost,
            ..AppState::default()
        };
        let visible = state.visible();
        assert_eq!(visible.first().map(|r| r.name), Some("Chaat Street"));
        assert!(visible.windows(2).all(|w| w[0].cost_for_two <= w[1].cost_for_two));
    }

    #[test]
    fn test_sort_index_out_of_range() {
        assert_eq!(SortKey::from_index(1), SortKey::Rating);
        assert_eq!(SortKey::from_index(99), SortKey::Relevance);
    }

    #[test]
    fn test_focus_cycles() {
        let mut focus = Focus::default();
        for _ in 0..5 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Search);
    }
}
