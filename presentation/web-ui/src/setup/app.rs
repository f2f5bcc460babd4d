use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, EventTarget};

use crate::dom::browser::js_error;
use crate::dom::list_view::{ACTION_DELETE, ACTION_EDIT};
use crate::setup::dependency_injection::DependencyContainer;

pub struct App;

impl App {
    /// Attaches the event handlers, then shows the add panel and loads the list.
    pub fn run(container: DependencyContainer) -> anyhow::Result<()> {
        let DependencyContainer {
            controller,
            elements,
            list_view,
        } = container;

        {
            let controller = controller.clone();
            let form = elements.add_form.clone();
            let elements = elements.clone();
            listen(&form, "submit", move |event| {
                event.prevent_default();
                let draft = elements.add_draft();
                let controller = controller.clone();
                spawn_local(async move {
                    controller.submit_add(draft).await;
                });
            })?;
        }

        {
            let controller = controller.clone();
            let form = elements.update_form.clone();
            let elements = elements.clone();
            listen(&form, "submit", move |event| {
                event.prevent_default();
                let draft = elements.update_draft();
                let controller = controller.clone();
                spawn_local(async move {
                    controller.submit_update(draft).await;
                });
            })?;
        }

        {
            let controller = controller.clone();
            listen(&elements.cancel_update, "click", move |_| {
                controller.cancel_edit();
            })?;
        }

        {
            let controller = controller.clone();
            let list = list_view.list_element().clone();
            listen(&list, "click", move |event| {
                let Some((action, index)) = clicked_action(&event) else {
                    return;
                };
                let Some(item) = list_view.item_at(index) else {
                    return;
                };
                match action.as_str() {
                    ACTION_EDIT => controller.select_edit(item.edit_draft),
                    ACTION_DELETE => {
                        let controller = controller.clone();
                        spawn_local(async move {
                            controller.delete(item.id).await;
                        });
                    }
                    _ => {}
                }
            })?;
        }

        tracing::info!("Catalog screen mounted");
        spawn_local(async move {
            controller.start().await;
        });
        Ok(())
    }
}

/// Resolves a click inside the list to the entry button it landed on.
fn clicked_action(event: &Event) -> Option<(String, usize)> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let button = target.closest("button[data-action]").ok()??;
    let action = button.get_attribute("data-action")?;
    let index = button.get_attribute("data-index")?.parse::<usize>().ok()?;
    Some((action, index))
}

/// Handlers live as long as the page, so their closures are leaked on purpose.
fn listen<F>(target: &EventTarget, kind: &str, handler: F) -> anyhow::Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}
