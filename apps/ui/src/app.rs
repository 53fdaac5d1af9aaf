//! # App
//!
//! Owns the cached product list and the view state, and runs every user
//! action against the [`ProductApi`].
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  save() / delete()                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  API request ──── Err ──► generic failure notice, view unchanged        │
//! │       │                                                                 │
//! │       ▼ Ok                                                              │
//! │  success notice, modal closed                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  refresh(): GET the whole list, replace the cache                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cache is never patched locally. It only changes through `refresh()`.

use tracing::{debug, error, info};

use crate::client::ProductApi;
use crate::dialog::{ConfirmPrompt, Dialog, Notice};
use crate::error::{UiError, UiResult};
use crate::state::{ProductForm, ViewState};
use inventory_core::Product;

pub struct App<A> {
    api: A,
    products: Vec<Product>,
    view: ViewState,
}

impl<A: ProductApi> App<A> {
    pub fn new(api: A) -> Self {
        App {
            api,
            products: Vec::new(),
            view: ViewState::List,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Products as last fetched.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Fetches the full list and replaces the cache.
    ///
    /// On failure the old cache is kept and the generic notice is shown.
    pub async fn refresh<D: Dialog>(&mut self, dialog: &mut D) -> UiResult<()> {
        match self.api.list().await {
            Ok(products) => {
                debug!(count = products.len(), "Product list refreshed");
                self.products = products;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to load products");
                dialog.notify(&Notice::failure());
                Err(e)
            }
        }
    }

    /// Opens the modal with an empty form.
    pub fn open_create(&mut self) -> UiResult<()> {
        self.ensure_list()?;
        self.view = ViewState::Creating(ProductForm::empty());
        Ok(())
    }

    /// Opens the modal pre-filled from the 1-based `row`.
    pub fn open_edit(&mut self, row: usize) -> UiResult<()> {
        self.ensure_list()?;
        let product = self.product_at(row)?;
        self.view = ViewState::Editing {
            id: product.id,
            form: ProductForm::from_product(product),
        };
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> UiResult<()> {
        self.form_mut()?.name = name.into();
        Ok(())
    }

    pub fn set_price(&mut self, price: impl Into<String>) -> UiResult<()> {
        self.form_mut()?.price = price.into();
        Ok(())
    }

    /// Closes the modal and discards the form.
    pub fn cancel(&mut self) -> UiResult<()> {
        if !self.view.is_modal_open() {
            return Err(UiError::NoModal);
        }
        self.view = ViewState::List;
        Ok(())
    }

    /// Submits the open form as a create or an update.
    ///
    /// Any failure leaves the modal open with the form as typed.
    pub async fn save<D: Dialog>(&mut self, dialog: &mut D) -> UiResult<()> {
        let form = self.view.form().ok_or(UiError::NoModal)?;

        let payload = match form.to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                dialog.notify(&Notice::error(e.to_string()));
                return Err(e.into());
            }
        };

        let (result, done) = match self.view.editing_id() {
            Some(id) => (self.api.update(id, &payload).await, "Product updated"),
            None => (self.api.create(&payload).await, "Product added"),
        };

        match result {
            Ok(ack) => {
                info!(
                    affected_rows = ack.affected_rows,
                    insert_id = ack.insert_id,
                    "{done}"
                );
                self.view = ViewState::List;
                dialog.notify(&Notice::success(done));
                self.refresh(dialog).await
            }
            Err(e) => {
                error!(error = %e, "Failed to save product");
                dialog.notify(&Notice::failure());
                Err(e)
            }
        }
    }

    /// Deletes the product in the 1-based `row` after confirmation.
    ///
    /// Returns `false` when the user declined. No request is sent then.
    pub async fn delete<D: Dialog>(&mut self, row: usize, dialog: &mut D) -> UiResult<bool> {
        self.ensure_list()?;
        let id = self.product_at(row)?.id;

        if !dialog.confirm(&ConfirmPrompt::delete_product()).await {
            debug!(%id, "Delete declined");
            return Ok(false);
        }

        match self.api.delete(id).await {
            Ok(ack) => {
                info!(%id, affected_rows = ack.affected_rows, "Product deleted");
                dialog.notify(&Notice::success("Product deleted"));
                self.refresh(dialog).await?;
                Ok(true)
            }
            Err(e) => {
                error!(%id, error = %e, "Failed to delete product");
                dialog.notify(&Notice::failure());
                Err(e)
            }
        }
    }

    fn ensure_list(&self) -> UiResult<()> {
        if self.view.is_modal_open() {
            return Err(UiError::ModalOpen);
        }
        Ok(())
    }

    fn product_at(&self, row: usize) -> UiResult<&Product> {
        row.checked_sub(1)
            .and_then(|index| self.products.get(index))
            .ok_or(UiError::NoSuchRow(row))
    }

    fn form_mut(&mut self) -> UiResult<&mut ProductForm> {
        self.view.form_mut().ok_or(UiError::NoModal)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::dialog::{NoticeKind, GENERIC_FAILURE};
    use async_trait::async_trait;
    use inventory_core::{ProductId, ProductPayload, WriteResult};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeStore {
        products: Vec<Product>,
        next_id: i64,
        failing: bool,
        calls: Vec<String>,
    }

    /// In-memory [`ProductApi`] that records every call.
    #[derive(Default)]
    pub(crate) struct FakeApi {
        store: Mutex<FakeStore>,
    }

    impl FakeApi {
        pub(crate) fn with_products(names: &[(&str, f64)]) -> Self {
            let api = FakeApi::default();
            {
                let mut store = api.store.lock().unwrap();
                for (name, price) in names {
                    store.next_id += 1;
                    let id = ProductId(store.next_id);
                    store.products.push(Product {
                        id,
                        name: name.to_string(),
                        price: *price,
                    });
                }
            }
            api
        }

        pub(crate) fn set_failing(&self, failing: bool) {
            self.store.lock().unwrap().failing = failing;
        }

        pub(crate) fn calls(&self) -> Vec<String> {
            self.store.lock().unwrap().calls.clone()
        }

        pub(crate) fn stored(&self) -> Vec<Product> {
            self.store.lock().unwrap().products.clone()
        }

        fn begin(&self, call: String) -> UiResult<std::sync::MutexGuard<'_, FakeStore>> {
            let mut store = self.store.lock().unwrap();
            store.calls.push(call);
            if store.failing {
                return Err(UiError::Status {
                    status: 500,
                    body: r#"{"code":"STORAGE_ERROR","message":"database is locked"}"#.into(),
                });
            }
            Ok(store)
        }
    }

    #[async_trait]
    impl ProductApi for FakeApi {
        async fn list(&self) -> UiResult<Vec<Product>> {
            let store = self.begin("list".into())?;
            Ok(store.products.clone())
        }

        async fn create(&self, payload: &ProductPayload) -> UiResult<WriteResult> {
            let mut store = self.begin("create".into())?;
            store.next_id += 1;
            let id = store.next_id;
            store.products.push(Product {
                id: ProductId(id),
                name: payload.name.clone().unwrap_or_default(),
                price: payload.price.unwrap_or_default(),
            });
            Ok(WriteResult {
                affected_rows: 1,
                insert_id: id,
            })
        }

        async fn update(&self, id: ProductId, payload: &ProductPayload) -> UiResult<WriteResult> {
            let mut store = self.begin(format!("update {id}"))?;
            let mut affected_rows = 0;
            if let Some(product) = store.products.iter_mut().find(|p| p.id == id) {
                product.name = payload.name.clone().unwrap_or_default();
                product.price = payload.price.unwrap_or_default();
                affected_rows = 1;
            }
            Ok(WriteResult {
                affected_rows,
                insert_id: 0,
            })
        }

        async fn delete(&self, id: ProductId) -> UiResult<WriteResult> {
            let mut store = self.begin(format!("delete {id}"))?;
            let before = store.products.len();
            store.products.retain(|p| p.id != id);
            Ok(WriteResult {
                affected_rows: (before - store.products.len()) as u64,
                insert_id: 0,
            })
        }
    }

    /// [`Dialog`] with canned answers that records what it was shown.
    #[derive(Default)]
    pub(crate) struct ScriptedDialog {
        pub(crate) answers: VecDeque<bool>,
        pub(crate) prompts: Vec<ConfirmPrompt>,
        pub(crate) notices: Vec<Notice>,
    }

    impl ScriptedDialog {
        pub(crate) fn answering(answers: &[bool]) -> Self {
            ScriptedDialog {
                answers: answers.iter().copied().collect(),
                ..Default::default()
            }
        }

        fn messages(&self) -> Vec<&str> {
            self.notices.iter().map(|n| n.message.as_str()).collect()
        }
    }

    #[async_trait]
    impl Dialog for ScriptedDialog {
        async fn confirm(&mut self, prompt: &ConfirmPrompt) -> bool {
            self.prompts.push(prompt.clone());
            self.answers.pop_front().unwrap_or(false)
        }

        fn notify(&mut self, notice: &Notice) {
            self.notices.push(notice.clone());
        }
    }

    async fn loaded(names: &[(&str, f64)]) -> (App<FakeApi>, ScriptedDialog) {
        let mut app = App::new(FakeApi::with_products(names));
        let mut dialog = ScriptedDialog::default();
        app.refresh(&mut dialog).await.unwrap();
        (app, dialog)
    }

    #[tokio::test]
    async fn test_refresh_replaces_cache() {
        let (app, dialog) = loaded(&[("Kopi Susu", 15000.0), ("Teh Manis", 8000.0)]).await;
        assert_eq!(app.products().len(), 2);
        assert_eq!(app.products()[1].name, "Teh Manis");
        assert!(dialog.notices.is_empty());
        assert_eq!(app.view(), &ViewState::List);
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_cache() {
        let (mut app, mut dialog) = loaded(&[("Kopi Susu", 15000.0)]).await;
        app.api().set_failing(true);

        assert!(app.refresh(&mut dialog).await.is_err());
        assert_eq!(app.products().len(), 1);
        assert_eq!(dialog.messages(), vec![GENERIC_FAILURE]);
    }

    #[tokio::test]
    async fn test_create_flow() {
        let (mut app, mut dialog) = loaded(&[]).await;

        app.open_create().unwrap();
        assert_eq!(app.view(), &ViewState::Creating(ProductForm::empty()));
        app.set_name("Kopi Susu").unwrap();
        app.set_price("15000").unwrap();
        app.save(&mut dialog).await.unwrap();

        assert_eq!(app.view(), &ViewState::List);
        assert_eq!(app.api().calls(), vec!["list", "create", "list"]);
        assert_eq!(app.products().len(), 1);
        assert_eq!(app.products()[0].price, 15000.0);
        assert_eq!(dialog.messages(), vec!["Product added"]);
        assert_eq!(dialog.notices[0].kind, NoticeKind::Success);
    }

    #[tokio::test]
    async fn test_edit_prefills_and_updates() {
        let (mut app, mut dialog) = loaded(&[("Kopi Susu", 15000.0), ("Teh Manis", 8000.0)]).await;

        app.open_edit(2).unwrap();
        assert_eq!(app.view().editing_id(), Some(ProductId(2)));
        let form = app.view().form().unwrap();
        assert_eq!(form.name, "Teh Manis");
        assert_eq!(form.price, "8000");

        app.set_price("9000").unwrap();
        app.save(&mut dialog).await.unwrap();

        assert_eq!(app.view(), &ViewState::List);
        assert_eq!(app.api().calls(), vec!["list", "update 2", "list"]);
        assert_eq!(app.products()[1].price, 9000.0);
        assert_eq!(app.products()[0].price, 15000.0);
        assert_eq!(dialog.messages(), vec!["Product updated"]);
    }

    #[tokio::test]
    async fn test_validation_failure_keeps_modal_open() {
        let (mut app, mut dialog) = loaded(&[]).await;

        app.open_create().unwrap();
        app.set_price("15000").unwrap();
        let err = app.save(&mut dialog).await.unwrap_err();
        assert!(matches!(err, UiError::Validation(_)));

        app.set_name("Kopi Susu").unwrap();
        app.set_price("lima ribu").unwrap();
        assert!(app.save(&mut dialog).await.is_err());

        assert!(app.view().is_modal_open());
        assert_eq!(app.api().calls(), vec!["list"]);
        assert_eq!(dialog.notices.len(), 2);
        assert!(dialog.notices.iter().all(|n| n.kind == NoticeKind::Error));
    }

    #[tokio::test]
    async fn test_api_failure_keeps_form() {
        let (mut app, mut dialog) = loaded(&[]).await;
        app.open_create().unwrap();
        app.set_name("Kopi Susu").unwrap();
        app.set_price("15000").unwrap();

        app.api().set_failing(true);
        let err = app.save(&mut dialog).await.unwrap_err();
        assert!(err.is_api_failure());

        let form = app.view().form().unwrap();
        assert_eq!(form.name, "Kopi Susu");
        assert_eq!(form.price, "15000");
        assert_eq!(dialog.messages(), vec![GENERIC_FAILURE]);

        app.api().set_failing(false);
        app.save(&mut dialog).await.unwrap();
        assert_eq!(app.products().len(), 1);
    }

    #[tokio::test]
    async fn test_cancel_discards_form() {
        let (mut app, mut dialog) = loaded(&[("Kopi Susu", 15000.0)]).await;
        app.open_edit(1).unwrap();
        app.set_name("Changed").unwrap();
        app.cancel().unwrap();

        assert_eq!(app.view(), &ViewState::List);
        app.refresh(&mut dialog).await.unwrap();
        assert_eq!(app.products()[0].name, "Kopi Susu");
        assert!(matches!(app.cancel(), Err(UiError::NoModal)));
    }

    #[tokio::test]
    async fn test_delete_declined_sends_nothing() {
        let (mut app, _) = loaded(&[("Kopi Susu", 15000.0)]).await;
        let mut dialog = ScriptedDialog::answering(&[false]);

        assert!(!app.delete(1, &mut dialog).await.unwrap());
        assert_eq!(dialog.prompts, vec![ConfirmPrompt::delete_product()]);
        assert_eq!(app.api().calls(), vec!["list"]);
        assert_eq!(app.products().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_confirmed() {
        let (mut app, _) = loaded(&[("Kopi Susu", 15000.0), ("Teh Manis", 8000.0)]).await;
        let mut dialog = ScriptedDialog::answering(&[true]);

        assert!(app.delete(1, &mut dialog).await.unwrap());
        assert_eq!(app.api().calls(), vec!["list", "delete 1", "list"]);
        assert_eq!(app.products().len(), 1);
        assert_eq!(app.products()[0].name, "Teh Manis");
        assert_eq!(app.api().stored().len(), 1);
        assert_eq!(dialog.messages(), vec!["Product deleted"]);
    }

    #[tokio::test]
    async fn test_delete_failure_notifies() {
        let (mut app, _) = loaded(&[("Kopi Susu", 15000.0)]).await;
        let mut dialog = ScriptedDialog::answering(&[true]);
        app.api().set_failing(true);

        assert!(app.delete(1, &mut dialog).await.is_err());
        assert_eq!(dialog.messages(), vec![GENERIC_FAILURE]);
        assert_eq!(app.products().len(), 1);
    }

    #[tokio::test]
    async fn test_commands_rejected_in_wrong_view() {
        let (mut app, mut dialog) = loaded(&[("Kopi Susu", 15000.0)]).await;

        assert!(matches!(app.set_name("x"), Err(UiError::NoModal)));
        assert!(matches!(app.save(&mut dialog).await, Err(UiError::NoModal)));
        assert!(matches!(app.open_edit(0), Err(UiError::NoSuchRow(0))));
        assert!(matches!(app.open_edit(2), Err(UiError::NoSuchRow(2))));

        app.open_create().unwrap();
        assert!(matches!(app.open_create(), Err(UiError::ModalOpen)));
        assert!(matches!(app.open_edit(1), Err(UiError::ModalOpen)));
        assert!(matches!(
            app.delete(1, &mut dialog).await,
            Err(UiError::ModalOpen)
        ));
        assert!(dialog.prompts.is_empty());
    }
}
