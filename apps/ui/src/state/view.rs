//! # View State
//!
//! Which screen the UI shows, as one tagged union.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │          add                                 edit <row>                 │
//! │   ┌──────────────┐    ┌──────────┐    ┌──────────────────┐             │
//! │   │   Creating   │◄───│   List   │───►│  Editing { id }  │             │
//! │   │ (empty form) │    │ (default)│    │ (pre-filled form)│             │
//! │   └──────┬───────┘    └────┬─────┘    └────────┬─────────┘             │
//! │          │                 │ ▲                 │                        │
//! │          │   save ok /     │ │ delete          │  save ok /             │
//! │          └── cancel ──────►│ └─ (confirm)      └── cancel ──►  List     │
//! │                                                                         │
//! │  A failed save stays in Creating / Editing with the form untouched.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The form lives inside the modal variants, so there is no way to have an
//! edit id bound while the modal is closed.

use inventory_core::validation::{validate_product_form, ValidationResult};
use inventory_core::{Product, ProductId, ProductPayload};

/// Raw text of the two form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
}

impl ProductForm {
    /// Empty form for a new product.
    pub fn empty() -> Self {
        ProductForm::default()
    }

    /// Form pre-filled from an existing row.
    pub fn from_product(product: &Product) -> Self {
        ProductForm {
            name: product.name.clone(),
            price: format_price_input(product.price),
        }
    }

    /// Validates the inputs and builds the request body.
    pub fn to_payload(&self) -> ValidationResult<ProductPayload> {
        validate_product_form(&self.name, &self.price)
    }
}

/// Writes a price the way a number input shows it (`15000`, not `15000.0`).
fn format_price_input(price: f64) -> String {
    if price.fract() == 0.0 && price.abs() < 1e15 {
        format!("{}", price as i64)
    } else {
        price.to_string()
    }
}

/// The screen currently shown.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    /// Product table only.
    #[default]
    List,

    /// Modal open for a new product.
    Creating(ProductForm),

    /// Modal open for an existing product.
    Editing { id: ProductId, form: ProductForm },
}

impl ViewState {
    pub fn is_modal_open(&self) -> bool {
        !matches!(self, ViewState::List)
    }

    pub fn form(&self) -> Option<&ProductForm> {
        match self {
            ViewState::List => None,
            ViewState::Creating(form) | ViewState::Editing { form, .. } => Some(form),
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut ProductForm> {
        match self {
            ViewState::List => None,
            ViewState::Creating(form) | ViewState::Editing { form, .. } => Some(form),
        }
    }

    /// Id bound to the modal, if editing.
    pub fn editing_id(&self) -> Option<ProductId> {
        match self {
            ViewState::Editing { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Modal heading.
    pub fn title(&self) -> Option<&'static str> {
        match self {
            ViewState::List => None,
            ViewState::Creating(_) => Some("Add Product"),
            ViewState::Editing { .. } => Some("Edit Product"),
        }
    }

    /// Submit button label.
    pub fn submit_label(&self) -> Option<&'static str> {
        match self {
            ViewState::List => None,
            ViewState::Creating(_) => Some("Save"),
            ViewState::Editing { .. } => Some("Update"),
        }
    }
}
