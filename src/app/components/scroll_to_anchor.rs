use std::rc::Rc;

use dioxus::prelude::*;

use crate::anchor::{self, AnchorDom, AnchorMemory, EvalDom, Location};
use crate::app::Route;

/// Smooth-scrolls to the URL fragment's element after each route change.
///
/// Renders nothing. The fragment memory belongs to this instance; see
/// [`anchor::observe`] for the scheduling rules.
#[component]
pub fn ScrollToAnchor() -> Element {
    let location = use_route::<Route>().location();
    use_anchor_scroll(location, EvalDom);

    rsx! {}
}

/// Runs [`anchor::observe`] against `dom` whenever `location` changes,
/// fragment included.
///
/// Each change spawns its own task; earlier tasks are not cancelled.
pub fn use_anchor_scroll<D>(location: Location, dom: D)
where
    D: AnchorDom + Clone + 'static,
{
    let memory = use_hook(|| Rc::new(AnchorMemory::default()));

    use_effect(use_reactive((&location,), move |(location,)| {
        let memory = memory.clone();
        let dom = dom.clone();
        spawn(async move {
            match anchor::observe(&memory, &location, &dom).await {
                Ok(outcome) => tracing::debug!(%location, ?outcome, "Observed route change"),
                Err(err) => tracing::warn!(%location, error = %err, "Anchor scroll failed"),
            }
        });
    }));
}
