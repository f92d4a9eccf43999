//! Scroll-to-anchor support
//!
//! After a route change, a URL fragment such as `/security#disclosure` names
//! an element on the newly rendered page. This module provides:
//! - Location parsing (path + fragment)
//! - A single-slot memory for the last fragment seen
//! - The observer step that schedules a delayed smooth scroll
//!
//! A fragment whose element is missing stays remembered and can still fire
//! after a later navigation renders a matching id. Scheduled scrolls are
//! never cancelled; each reads the memory when it fires.

mod dom;
mod location;
mod memory;

pub use dom::{AnchorDom, EvalDom};
pub use location::Location;
pub use memory::AnchorMemory;

use crate::config::SCROLL_DELAY;
use crate::Result;

/// What one route-change observation ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// No fragment remembered.
    Idle,
    /// A fragment is remembered but its element is not rendered; kept.
    Deferred(String),
    /// Scrolled to this id once the delay elapsed.
    Scrolled(String),
    /// The id was remembered at fire time but its element had gone.
    Vanished(String),
    /// Another scroll already consumed the memory before this one fired.
    Superseded,
}

/// Handles one route change.
///
/// Remembers the location's fragment, and when the remembered id is
/// rendered, waits [`SCROLL_DELAY`] before scrolling to whatever id is
/// remembered at that moment and clearing the memory.
pub async fn observe<D: AnchorDom>(
    memory: &AnchorMemory,
    location: &Location,
    dom: &D,
) -> Result<ScrollOutcome> {
    memory.remember(location);

    let Some(id) = memory.pending() else {
        return Ok(ScrollOutcome::Idle);
    };
    if !dom.contains(&id).await? {
        tracing::debug!(%id, "Anchor target not rendered, keeping it");
        return Ok(ScrollOutcome::Deferred(id));
    }

    dom.wait(SCROLL_DELAY).await?;

    let Some(id) = memory.take() else {
        return Ok(ScrollOutcome::Superseded);
    };
    if dom.scroll_into_view(&id).await? {
        Ok(ScrollOutcome::Scrolled(id))
    } else {
        Ok(ScrollOutcome::Vanished(id))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::future::Future;
    use std::time::Duration;

    use tokio::time::{sleep, Instant};

    use super::*;

    /// In-memory document that records scroll calls and their times.
    #[derive(Default)]
    struct FakeDom {
        ids: RefCell<HashSet<String>>,
        scrolls: RefCell<Vec<(String, Instant)>>,
    }

    impl FakeDom {
        fn with_ids(ids: &[&str]) -> Self {
            let dom = Self::default();
            for id in ids {
                dom.render(id);
            }
            dom
        }

        fn render(&self, id: &str) {
            self.ids.borrow_mut().insert(id.to_owned());
        }

        fn unrender(&self, id: &str) {
            self.ids.borrow_mut().remove(id);
        }

        fn scrolled_ids(&self) -> Vec<String> {
            self.scrolls.borrow().iter().map(|(id, _)| id.clone()).collect()
        }
    }

    impl AnchorDom for FakeDom {
        fn contains(&self, id: &str) -> impl Future<Output = Result<bool>> {
            let found = self.ids.borrow().contains(id);
            async move { Ok(found) }
        }

        fn scroll_into_view(&self, id: &str) -> impl Future<Output = Result<bool>> {
            let found = self.ids.borrow().contains(id);
            if found {
                self.scrolls.borrow_mut().push((id.to_owned(), Instant::now()));
            }
            async move { Ok(found) }
        }

        fn wait(&self, delay: Duration) -> impl Future<Output = Result<()>> {
            async move {
                sleep(delay).await;
                Ok(())
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn no_fragment_does_nothing() {
        let memory = AnchorMemory::default();
        let dom = FakeDom::with_ids(&["features"]);

        let outcome = observe(&memory, &Location::parse("/careers"), &dom).await.unwrap();

        assert_eq!(outcome, ScrollOutcome::Idle);
        assert_eq!(memory.pending(), None);
        assert!(dom.scrolled_ids().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn existing_target_scrolls_after_delay_and_clears() {
        let memory = AnchorMemory::default();
        let dom = FakeDom::with_ids(&["section-x"]);
        let start = Instant::now();

        let outcome = observe(&memory, &Location::parse("/#section-x"), &dom).await.unwrap();

        assert_eq!(outcome, ScrollOutcome::Scrolled("section-x".into()));
        assert_eq!(memory.pending(), None);
        let scrolls = dom.scrolls.borrow();
        assert_eq!(scrolls.len(), 1);
        let waited = scrolls[0].1 - start;
        assert!(waited >= SCROLL_DELAY);
        assert!(waited < SCROLL_DELAY + Duration::from_millis(5));
    }

    #[tokio::test(start_paused = true)]
    async fn missing_target_stays_remembered() {
        let memory = AnchorMemory::default();
        let dom = FakeDom::with_ids(&["features"]);

        let outcome = observe(&memory, &Location::parse("/#missing-id"), &dom).await.unwrap();

        assert_eq!(outcome, ScrollOutcome::Deferred("missing-id".into()));
        assert_eq!(memory.pending().as_deref(), Some("missing-id"));
        assert!(dom.scrolled_ids().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn remembered_fragment_fires_on_later_navigation() {
        let memory = AnchorMemory::default();
        let dom = FakeDom::default();

        observe(&memory, &Location::parse("/#missing-id"), &dom).await.unwrap();
        dom.render("missing-id");
        let outcome = observe(&memory, &Location::parse("/updates"), &dom).await.unwrap();

        assert_eq!(outcome, ScrollOutcome::Scrolled("missing-id".into()));
        assert_eq!(dom.scrolled_ids(), vec!["missing-id".to_string()]);
        assert_eq!(memory.pending(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_navigations_scroll_once_to_latest() {
        let memory = AnchorMemory::default();
        let dom = FakeDom::with_ids(&["features", "pricing"]);

        let features = Location::parse("/#features");
        let pricing = Location::parse("/#pricing");

        let first = observe(&memory, &features, &dom);
        let second = async {
            sleep(Duration::from_millis(10)).await;
            observe(&memory, &pricing, &dom).await
        };
        let (first, second) = tokio::join!(first, second);

        assert_eq!(first.unwrap(), ScrollOutcome::Scrolled("pricing".into()));
        assert_eq!(second.unwrap(), ScrollOutcome::Superseded);
        assert_eq!(dom.scrolled_ids(), vec!["pricing".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn target_removed_before_fire_still_clears() {
        let memory = AnchorMemory::default();
        let dom = FakeDom::with_ids(&["features"]);

        let features = Location::parse("/#features");

        let scroll = observe(&memory, &features, &dom);
        let teardown = async {
            sleep(Duration::from_millis(50)).await;
            dom.unrender("features");
        };
        let (outcome, ()) = tokio::join!(scroll, teardown);

        assert_eq!(outcome.unwrap(), ScrollOutcome::Vanished("features".into()));
        assert_eq!(memory.pending(), None);
        assert!(dom.scrolled_ids().is_empty());
    }
}
