use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::error::{self, SiteError};

pub const REVEAL_SELECTOR: &str = ".scroll-reveal";
pub const REVEALED_CLASS: &str = "revealed";

/// Elements still waiting to be revealed, tracked by their position in the
/// observed list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealSet {
    pending: BTreeSet<usize>,
}

impl RevealSet {
    pub fn with_pending(count: usize) -> Self {
        Self {
            pending: (0..count).collect(),
        }
    }

    /// Returns true the first time `index` becomes visible; the caller should
    /// then mark the element and stop observing it.
    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> bool {
        is_intersecting && self.pending.remove(&index)
    }

    pub fn is_done(&self) -> bool {
        self.pending.is_empty()
    }
}

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

/// Reveals every `.scroll-reveal` element on the page the first time it
/// scrolls into view.
#[hook]
pub fn use_scroll_reveal(threshold: f64, root_margin: String) {
    use_effect_with_deps(
        move |(threshold, root_margin): &(f64, String)| {
            let observer = observe_reveals(*threshold, root_margin).unwrap_or_else(|e| {
                warn!("Scroll reveal disabled: {}", e);
                None
            });
            move || {
                if let Some(reveal) = observer {
                    reveal.observer.disconnect();
                }
            }
        },
        (threshold, root_margin),
    );
}

fn observe_reveals(threshold: f64, root_margin: &str) -> Result<Option<RevealObserver>, SiteError> {
    let nodes = error::document()?.query_selector_all(REVEAL_SELECTOR)?;
    let targets: Vec<Element> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();
    if targets.is_empty() {
        return Ok(None);
    }
    debug!("Observing {} reveal targets", targets.len());

    let observed = targets.clone();
    let pending = Rc::new(RefCell::new(RevealSet::with_pending(targets.len())));
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let index = match targets.iter().position(|el| *el == target) {
                    Some(index) => index,
                    None => continue,
                };
                if pending.borrow_mut().on_intersection(index, entry.is_intersecting()) {
                    if let Err(e) = target.class_list().add_1(REVEALED_CLASS) {
                        warn!("Failed to mark element revealed: {:?}", e);
                    }
                    observer.unobserve(&target);
                }
            }
            if pending.borrow().is_done() {
                observer.disconnect();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for element in &observed {
        observer.observe(element);
    }

    Ok(Some(RevealObserver {
        observer,
        _callback: callback,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_exactly_once_across_reentries() {
        let mut set = RevealSet::with_pending(2);
        let visibility = [false, true, false, true, true, false, true];
        let triggers = visibility
            .iter()
            .filter(|&&visible| set.on_intersection(0, visible))
            .count();
        assert_eq!(triggers, 1);
        assert!(!set.on_intersection(0, true));
        assert!(set.on_intersection(1, true));
    }

    #[test]
    fn not_intersecting_keeps_element_pending() {
        let mut set = RevealSet::with_pending(1);
        assert!(!set.on_intersection(0, false));
        assert!(!set.is_done());
        assert!(set.on_intersection(0, true));
    }

    #[test]
    fn unknown_index_never_triggers() {
        let mut set = RevealSet::with_pending(1);
        assert!(!set.on_intersection(5, true));
    }

    #[test]
    fn done_when_everything_revealed() {
        let mut set = RevealSet::with_pending(3);
        for i in [2, 0, 1] {
            assert!(set.on_intersection(i, true));
        }
        assert!(set.is_done());
    }
}
