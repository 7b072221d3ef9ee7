//! # View Rendering
//!
//! Pure render functions: state in, serializable view model out. The
//! frontend only paints these models and sends back the [`CartAction`] or
//! [`StorefrontEvent`] attached to whatever the user clicked.
//!
//! ## Component Tree
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  StorefrontView                                                         │
//! │  ├── Loading { "Loading products..." }                                 │
//! │  └── Ready(PageView)                                                   │
//! │      ├── HeaderView      cart badge, search box                        │
//! │      ├── HeroView        static copy                                   │
//! │      ├── section title   "Featured Products" / "Search Results (n)"    │
//! │      ├── ProductCardView × n   (or EmptyState)                         │
//! │      └── CartPanelView   (only while open)                             │
//! │          ├── CartLineView × n  stepper −/+ , Remove                    │
//! │          └── total + Checkout  (only when non-empty)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here holds state between renders except [`ImageView`], whose
//! `src` flips to the fallback once the frontend reports a load error.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::money::CurrencyFormat;
use crate::storefront::{Storefront, StorefrontEvent};
use crate::types::{CartLine, Product, ProductId};
use crate::{DEFAULT_LOW_STOCK_THRESHOLD, FALLBACK_IMAGE_URL};

// =============================================================================
// Render Configuration
// =============================================================================

/// Inputs every render function shares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    pub currency: CurrencyFormat,
    /// Stock below this (and above zero) shows "Low Stock".
    pub low_stock_threshold: i64,
    /// Substituted when a product image fails to load.
    pub fallback_image: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            currency: CurrencyFormat::idr(),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            fallback_image: FALLBACK_IMAGE_URL.to_string(),
        }
    }
}

// =============================================================================
// Actions
// =============================================================================

/// Cart mutations requested by the views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "camelCase")]
#[ts(export)]
pub enum CartAction {
    Add {
        #[serde(rename = "productId")]
        product_id: ProductId,
    },
    Update {
        #[serde(rename = "productId")]
        product_id: ProductId,
        #[ts(type = "number")]
        quantity: i64,
    },
    Remove {
        #[serde(rename = "productId")]
        product_id: ProductId,
    },
    /// Placeholder; there is no checkout flow.
    Checkout,
}

/// A clickable control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ButtonView {
    pub label: String,
    pub disabled: bool,
    pub action: CartAction,
}

impl ButtonView {
    fn new(label: impl Into<String>, disabled: bool, action: CartAction) -> Self {
        ButtonView {
            label: label.into(),
            disabled,
            action,
        }
    }
}

// =============================================================================
// Image
// =============================================================================

/// An image with a fallback for load errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ImageView {
    pub src: String,
    pub alt: String,
    pub fallback_src: String,
}

impl ImageView {
    fn for_product(product: &Product, config: &ViewConfig) -> Self {
        let mut image = ImageView {
            src: product.image.trim().to_string(),
            alt: product.name.clone(),
            fallback_src: config.fallback_image.clone(),
        };
        // no image at all behaves like one that failed to load
        if image.src.is_empty() {
            image.on_error();
        }
        image
    }

    /// Handles an image load error by switching to the fallback.
    ///
    /// Returns `true` if `src` changed. A second error (the fallback itself
    /// failing) is a no-op so the frontend cannot loop. The page forwards
    /// every `<img>` error here through the `image_fallback` command.
    pub fn on_error(&mut self) -> bool {
        if self.src == self.fallback_src {
            return false;
        }
        self.src = self.fallback_src.clone();
        true
    }
}

// =============================================================================
// Product Card
// =============================================================================

/// Stock badge shown over the product image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum StockBadge {
    LowStock,
    OutOfStock,
}

impl StockBadge {
    pub fn label(&self) -> &'static str {
        match self {
            StockBadge::LowStock => "Low Stock",
            StockBadge::OutOfStock => "Out of Stock",
        }
    }

    /// Badge for a product, if any.
    pub fn for_product(product: &Product, low_stock_threshold: i64) -> Option<Self> {
        if product.is_out_of_stock() {
            Some(StockBadge::OutOfStock)
        } else if product.is_low_stock(low_stock_threshold) {
            Some(StockBadge::LowStock)
        } else {
            None
        }
    }
}

/// One product tile in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductCardView {
    pub product_id: ProductId,
    pub image: ImageView,
    pub badge: Option<StockBadge>,
    pub brand: String,
    pub name: String,
    pub model: String,
    pub description: String,
    /// Localized, e.g. "Rp 15.999.000"
    pub price: String,
    #[ts(type = "number")]
    pub stock: i64,
    pub add_button: ButtonView,
}

/// Renders a product card.
///
/// ## Example
/// ```rust
/// use handphone_core::sample_products;
/// use handphone_core::view::{render_product_card, ViewConfig};
///
/// let mut phone = sample_products().remove(0);
/// phone.stock = 0;
/// let card = render_product_card(&phone, &ViewConfig::default());
/// assert!(card.add_button.disabled);
/// assert_eq!(card.add_button.label, "Out of Stock");
/// ```
pub fn render_product_card(product: &Product, config: &ViewConfig) -> ProductCardView {
    let sold_out = product.is_out_of_stock();
    ProductCardView {
        product_id: product.id,
        image: ImageView::for_product(product, config),
        badge: StockBadge::for_product(product, config.low_stock_threshold),
        brand: product.brand.clone(),
        name: product.name.clone(),
        model: product.model.clone(),
        description: product.description.clone(),
        price: config.currency.format(product.price()),
        stock: product.stock,
        add_button: ButtonView::new(
            if sold_out { "Out of Stock" } else { "Add to Cart" },
            sold_out,
            CartAction::Add {
                product_id: product.id,
            },
        ),
    }
}

// =============================================================================
// Cart Panel
// =============================================================================

/// "Nothing here" message pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EmptyState {
    pub message: String,
    pub hint: String,
}

impl EmptyState {
    fn new(message: &str, hint: &str) -> Self {
        EmptyState {
            message: message.to_string(),
            hint: hint.to_string(),
        }
    }
}

/// One line in the cart panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLineView {
    pub product_id: ProductId,
    pub image: ImageView,
    pub name: String,
    pub brand: String,
    pub unit_price: String,
    #[ts(type = "number")]
    pub quantity: i64,
    pub decrement: ButtonView,
    pub increment: ButtonView,
    pub remove: ButtonView,
}

/// The slide-over cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartPanelView {
    /// "Shopping Cart (N)", N = total units
    pub title: String,
    pub lines: Vec<CartLineView>,
    pub empty: Option<EmptyState>,
    /// Formatted total; absent for an empty cart.
    pub total: Option<String>,
    /// Present only when the cart has lines.
    pub checkout: Option<ButtonView>,
    pub close: StorefrontEvent,
}

fn render_cart_line(line: &CartLine, config: &ViewConfig) -> CartLineView {
    let product = &line.product;
    let id = product.id;
    let quantity = line.quantity;

    CartLineView {
        product_id: id,
        image: ImageView::for_product(product, config),
        name: product.name.clone(),
        brand: product.brand.clone(),
        unit_price: config.currency.format(product.price()),
        quantity,
        decrement: ButtonView::new(
            "-",
            quantity <= 1,
            CartAction::Update {
                product_id: id,
                quantity: quantity - 1,
            },
        ),
        increment: ButtonView::new(
            "+",
            quantity >= product.stock,
            CartAction::Update {
                product_id: id,
                quantity: quantity + 1,
            },
        ),
        remove: ButtonView::new("Remove", false, CartAction::Remove { product_id: id }),
    }
}

/// Renders the cart panel, or nothing while it is closed.
pub fn render_cart_panel(cart: &Cart, is_open: bool, config: &ViewConfig) -> Option<CartPanelView> {
    if !is_open {
        return None;
    }

    let lines: Vec<CartLineView> = cart
        .lines()
        .iter()
        .map(|line| render_cart_line(line, config))
        .collect();

    let (empty, total, checkout) = if cart.is_empty() {
        (
            Some(EmptyState::new(
                "Your cart is empty",
                "Add some products to get started",
            )),
            None,
            None,
        )
    } else {
        (
            None,
            Some(config.currency.format(cart.total_price())),
            Some(ButtonView::new("Checkout", false, CartAction::Checkout)),
        )
    };

    Some(CartPanelView {
        title: format!("Shopping Cart ({})", cart.total_items()),
        lines,
        empty,
        total,
        checkout,
        close: StorefrontEvent::CloseCart,
    })
}

// =============================================================================
// Page
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HeaderView {
    pub store_name: String,
    #[ts(type = "number")]
    pub cart_items_count: i64,
    pub search_query: String,
    pub open_cart: StorefrontEvent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HeroView {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PageView {
    pub header: HeaderView,
    pub hero: HeroView,
    pub section_title: String,
    /// "Clear Search" is offered only while a query is active.
    pub clear_search: Option<StorefrontEvent>,
    pub cards: Vec<ProductCardView>,
    pub empty: Option<EmptyState>,
    pub cart: Option<CartPanelView>,
}

/// The whole screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "state", content = "view", rename_all = "camelCase")]
#[ts(export)]
pub enum StorefrontView {
    Loading { message: String },
    Ready(PageView),
}

/// Renders the storefront screen.
pub fn render_storefront(
    store: &Storefront,
    cart: &Cart,
    store_name: &str,
    config: &ViewConfig,
) -> StorefrontView {
    if store.is_loading() {
        return StorefrontView::Loading {
            message: "Loading products...".to_string(),
        };
    }

    let filtered = store.filtered();
    let section_title = if store.has_query() {
        format!("Search Results ({})", filtered.len())
    } else {
        "Featured Products".to_string()
    };
    let empty = filtered.is_empty().then(|| {
        EmptyState::new("No products found", "Try adjusting your search terms")
    });

    StorefrontView::Ready(PageView {
        header: HeaderView {
            store_name: store_name.to_string(),
            cart_items_count: cart.total_items(),
            search_query: store.query().to_string(),
            open_cart: StorefrontEvent::OpenCart,
        },
        hero: HeroView {
            title: "Premium Phone Collection".to_string(),
            subtitle: "Discover the latest smartphones from top brands".to_string(),
        },
        section_title,
        clear_search: store.has_query().then_some(StorefrontEvent::ClearSearch),
        cards: filtered
            .into_iter()
            .map(|product| render_product_card(product, config))
            .collect(),
        empty,
        cart: render_cart_panel(cart, store.is_cart_open(), config),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_products;

    fn phone_with_stock(stock: i64) -> Product {
        let mut p = sample_products().remove(3); // Pixel 8 Pro
        p.stock = stock;
        p
    }

    fn page(view: StorefrontView) -> PageView {
        match view {
            StorefrontView::Ready(page) => page,
            StorefrontView::Loading { .. } => panic!("expected a ready page"),
        }
    }

    #[test]
    fn test_card_in_stock() {
        let card = render_product_card(&phone_with_stock(15), &ViewConfig::default());
        assert_eq!(card.price, "Rp\u{a0}13.999.000");
        assert_eq!(card.badge, None);
        assert!(!card.add_button.disabled);
        assert_eq!(card.add_button.label, "Add to Cart");
        assert_eq!(card.add_button.action, CartAction::Add { product_id: 4 });
        assert_eq!(card.model, "GC3VE");
    }

    #[test]
    fn test_card_badges() {
        let config = ViewConfig::default();
        assert_eq!(
            render_product_card(&phone_with_stock(4), &config).badge,
            Some(StockBadge::LowStock)
        );
        assert_eq!(render_product_card(&phone_with_stock(5), &config).badge, None);

        let sold_out = render_product_card(&phone_with_stock(0), &config);
        assert_eq!(sold_out.badge, Some(StockBadge::OutOfStock));
        assert_eq!(sold_out.badge.map(|b| b.label()), Some("Out of Stock"));
        assert!(sold_out.add_button.disabled);
    }

    #[test]
    fn test_whitespace_query_shows_search_results_title() {
        let mut store = Storefront::with_products(sample_products());
        store.apply(StorefrontEvent::SearchChanged {
            query: "  ".to_string(),
        });

        let view = page(render_storefront(&store, &Cart::new(), "Shop", &ViewConfig::default()));
        assert_eq!(view.section_title, "Search Results (5)");
        assert_eq!(view.clear_search, Some(StorefrontEvent::ClearSearch));
        assert_eq!(view.cards.len(), 5);
    }

    #[test]
    fn test_image_without_src_uses_fallback() {
        let mut p = phone_with_stock(3);
        p.image = "  ".to_string();

        let image = render_product_card(&p, &ViewConfig::default()).image;
        assert_eq!(image.src, FALLBACK_IMAGE_URL);
        assert_eq!(image.fallback_src, FALLBACK_IMAGE_URL);
    }

    #[test]
    fn test_image_fallback_on_error() {
        let config = ViewConfig::default();
        let mut p = phone_with_stock(3);
        p.image = "https://example.invalid/broken.jpg".to_string();

        let mut image = render_product_card(&p, &config).image;
        assert_eq!(image.src, "https://example.invalid/broken.jpg");
        assert!(image.on_error());
        assert_eq!(image.src, FALLBACK_IMAGE_URL);
        assert!(!image.on_error());
        assert_eq!(image.src, FALLBACK_IMAGE_URL);
    }

    #[test]
    fn test_missing_image_uses_fallback() {
        let mut p = phone_with_stock(3);
        p.image = String::new();
        let card = render_product_card(&p, &ViewConfig::default());
        assert_eq!(card.image.src, FALLBACK_IMAGE_URL);
    }

    #[test]
    fn test_cart_panel_closed() {
        let cart = Cart::new();
        assert!(render_cart_panel(&cart, false, &ViewConfig::default()).is_none());
    }

    #[test]
    fn test_cart_panel_empty() {
        let panel = render_cart_panel(&Cart::new(), true, &ViewConfig::default()).unwrap();
        assert_eq!(panel.title, "Shopping Cart (0)");
        assert!(panel.lines.is_empty());
        assert_eq!(
            panel.empty.map(|e| e.message),
            Some("Your cart is empty".to_string())
        );
        assert!(panel.total.is_none());
        assert!(panel.checkout.is_none());
    }

    #[test]
    fn test_cart_panel_stepper_bounds() {
        let mut cart = Cart::new();
        let p = phone_with_stock(2);
        cart.add(&p).unwrap();

        let panel = render_cart_panel(&cart, true, &ViewConfig::default()).unwrap();
        let line = &panel.lines[0];
        assert!(line.decrement.disabled);
        assert!(!line.increment.disabled);
        assert_eq!(
            line.increment.action,
            CartAction::Update {
                product_id: 4,
                quantity: 2
            }
        );

        cart.add(&p).unwrap();
        let panel = render_cart_panel(&cart, true, &ViewConfig::default()).unwrap();
        let line = &panel.lines[0];
        assert!(!line.decrement.disabled);
        assert!(line.increment.disabled);
        assert_eq!(line.remove.action, CartAction::Remove { product_id: 4 });
    }

    #[test]
    fn test_cart_panel_totals() {
        let mut cart = Cart::new();
        let products = sample_products();
        cart.add(&products[0]).unwrap();
        cart.add(&products[0]).unwrap();
        cart.add(&products[4]).unwrap();

        let panel = render_cart_panel(&cart, true, &ViewConfig::default()).unwrap();
        assert_eq!(panel.title, "Shopping Cart (3)");
        assert_eq!(panel.total.as_deref(), Some("Rp\u{a0}43.997.000"));
        assert_eq!(
            panel.checkout.map(|b| b.action),
            Some(CartAction::Checkout)
        );
        assert!(panel.empty.is_none());
    }

    #[test]
    fn test_storefront_loading() {
        let view = render_storefront(
            &Storefront::loading(),
            &Cart::new(),
            "Handphone Shop",
            &ViewConfig::default(),
        );
        assert_eq!(
            view,
            StorefrontView::Loading {
                message: "Loading products...".to_string()
            }
        );
    }

    #[test]
    fn test_storefront_featured_and_search_titles() {
        let config = ViewConfig::default();
        let mut store = Storefront::with_products(sample_products());
        let cart = Cart::new();

        let featured = page(render_storefront(&store, &cart, "Shop", &config));
        assert_eq!(featured.section_title, "Featured Products");
        assert_eq!(featured.cards.len(), 5);
        assert!(featured.clear_search.is_none());
        assert!(featured.cart.is_none());

        store.apply(StorefrontEvent::SearchChanged {
            query: "ultra".to_string(),
        });
        let results = page(render_storefront(&store, &cart, "Shop", &config));
        assert_eq!(results.section_title, "Search Results (2)");
        assert_eq!(results.clear_search, Some(StorefrontEvent::ClearSearch));
        assert_eq!(results.header.search_query, "ultra");
    }

    #[test]
    fn test_storefront_no_results() {
        let mut store = Storefront::with_products(sample_products());
        store.apply(StorefrontEvent::SearchChanged {
            query: "nokia".to_string(),
        });
        let view = page(render_storefront(&store, &Cart::new(), "Shop", &ViewConfig::default()));
        assert!(view.cards.is_empty());
        assert_eq!(view.section_title, "Search Results (0)");
        assert_eq!(
            view.empty.map(|e| e.hint),
            Some("Try adjusting your search terms".to_string())
        );
    }

    #[test]
    fn test_storefront_header_badge_and_open_cart() {
        let products = sample_products();
        let mut store = Storefront::with_products(products.clone());
        let mut cart = Cart::new();
        cart.add(&products[1]).unwrap();
        cart.update(2, 3).unwrap();
        store.apply(StorefrontEvent::OpenCart);

        let view = page(render_storefront(&store, &cart, "Shop", &ViewConfig::default()));
        assert_eq!(view.header.cart_items_count, 3);
        assert_eq!(view.cart.map(|c| c.lines.len()), Some(1));
    }

    #[test]
    fn test_cart_action_json_shape() {
        let action: CartAction =
            serde_json::from_str(r#"{"type": "update", "productId": 3, "quantity": 2}"#).unwrap();
        assert_eq!(
            action,
            CartAction::Update {
                product_id: 3,
                quantity: 2
            }
        );
    }
}
