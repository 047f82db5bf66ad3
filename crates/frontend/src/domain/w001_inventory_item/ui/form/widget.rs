use crate::shared::components::ui::{Button, Input};
use crate::shared::modal::Modal;
use crate::shared::state::{FormMode, WarehouseStore};
use crate::shared::toast::ToastService;
use contracts::domain::w001_inventory_item::{InventoryItem, InventoryItemDraft};
use leptos::prelude::*;

/// Modal host for the inventory form. Renders nothing while the form
/// state machine is `Closed`; `Adding` and `Editing` open the modal with
/// an empty or prefilled draft.
#[component]
pub fn InventoryItemForm(form: RwSignal<FormMode<InventoryItem>>) -> impl IntoView {
    move || match form.get() {
        FormMode::Closed => ().into_any(),
        FormMode::Adding => view! {
            <ItemFormModal form=form existing=None />
        }
        .into_any(),
        FormMode::Editing(item) => view! {
            <ItemFormModal form=form existing=Some(item) />
        }
        .into_any(),
    }
}

#[component]
fn ItemFormModal(
    form: RwSignal<FormMode<InventoryItem>>,
    existing: Option<InventoryItem>,
) -> impl IntoView {
    let store = WarehouseStore::use_store();
    let toasts = ToastService::use_toasts();

    let editing_id = existing.as_ref().map(|item| item.id);
    let title = match &existing {
        Some(item) => format!("Edit {}", item.code),
        None => "Add inventory item".to_string(),
    };

    let name = RwSignal::new(existing.as_ref().map(|i| i.name.clone()).unwrap_or_default());
    let category = RwSignal::new(
        existing
            .as_ref()
            .map(|i| i.category.clone())
            .unwrap_or_default(),
    );
    let quantity = RwSignal::new(
        existing
            .as_ref()
            .map(|i| i.quantity.to_string())
            .unwrap_or_default(),
    );
    let unit_price = RwSignal::new(
        existing
            .as_ref()
            .map(|i| i.unit_price.to_string())
            .unwrap_or_default(),
    );
    let supplier = RwSignal::new(
        existing
            .as_ref()
            .map(|i| i.supplier.clone())
            .unwrap_or_default(),
    );
    let error: RwSignal<Option<String>> = RwSignal::new(None);

    // Numeric fields are parsed here, at the form boundary; the store
    // only ever sees a typed, validated draft.
    let build_draft = move || -> Result<InventoryItemDraft, String> {
        let quantity: u32 = quantity
            .get_untracked()
            .trim()
            .parse()
            .map_err(|_| "Quantity must be a whole number".to_string())?;
        let unit_price: f64 = unit_price
            .get_untracked()
            .trim()
            .parse()
            .map_err(|_| "Unit price must be a number".to_string())?;
        let draft = InventoryItemDraft {
            name: name.get_untracked().trim().to_string(),
            category: category.get_untracked().trim().to_string(),
            quantity,
            unit_price,
            supplier: supplier.get_untracked().trim().to_string(),
            last_updated: chrono::Utc::now().date_naive(),
        };
        draft.validate()?;
        Ok(draft)
    };

    let close = Callback::new(move |_: ()| form.set(FormMode::Closed));

    let submit = Callback::new(move |_| {
        let draft = match build_draft() {
            Ok(draft) => draft,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        let saved = match editing_id {
            Some(id) => store.update_item(id, draft),
            None => store.add_item(draft),
        };
        match saved {
            Ok(item) => {
                toasts.success(format!("Saved {} ({})", item.name, item.code));
                form.set(FormMode::Closed);
            }
            // Store errors (stale id) go through the toast service
            Err(err) => toasts.error(err.to_string()),
        }
    });

    view! {
        <Modal title=title on_close=close>
            <div class="form">
                {move || {
                    error.get().map(|message| {
                        view! { <div class="form__error">{message}</div> }
                    })
                }}
                <Input
                    label="Name"
                    value=Signal::derive(move || name.get())
                    on_input=Callback::new(move |v: String| name.set(v))
                    required=true
                />
                <Input
                    label="Category"
                    value=Signal::derive(move || category.get())
                    on_input=Callback::new(move |v: String| category.set(v))
                    required=true
                />
                <Input
                    label="Quantity"
                    input_type="number"
                    value=Signal::derive(move || quantity.get())
                    on_input=Callback::new(move |v: String| quantity.set(v))
                    required=true
                />
                <Input
                    label="Unit price"
                    input_type="number"
                    value=Signal::derive(move || unit_price.get())
                    on_input=Callback::new(move |v: String| unit_price.set(v))
                    required=true
                />
                <Input
                    label="Supplier"
                    value=Signal::derive(move || supplier.get())
                    on_input=Callback::new(move |v: String| supplier.set(v))
                    required=true
                />
                <div class="form__actions">
                    <Button variant="secondary" on_click=Callback::new(move |_| close.run(()))>
                        "Cancel"
                    </Button>
                    <Button on_click=submit>
                        {if editing_id.is_some() { "Save changes" } else { "Add item" }}
                    </Button>
                </div>
            </div>
        </Modal>
    }
}
