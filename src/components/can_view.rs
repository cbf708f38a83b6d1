use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::sections::pose::{Pose, EASING_SPEED};

/// Where the can should head, written by section signals and read each frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CanTarget {
    pub pose: Pose,
    pub scroll_offset: f64,
}

/// Shared handle to a [`CanTarget`]. Equality is identity, so updating the
/// target never re-renders the view.
#[derive(Clone, Debug, Default)]
pub struct CanTargetHandle(Rc<RefCell<CanTarget>>);

impl CanTargetHandle {
    pub fn set(&self, pose: Pose, scroll_offset: Option<f64>) {
        let mut target = self.0.borrow_mut();
        target.pose = pose;
        if let Some(offset) = scroll_offset {
            target.scroll_offset = offset;
        }
    }

    pub fn get(&self) -> CanTarget {
        self.0.borrow().clone()
    }
}

impl PartialEq for CanTargetHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct CanViewProps {
    pub target: CanTargetHandle,
    #[prop_or(16)]
    pub frame_ms: u32,
}

#[function_component(CanView)]
pub fn can_view(props: &CanViewProps) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        let target = props.target.clone();
        let frame_ms = props.frame_ms;
        use_effect_with_deps(
            move |_| {
                let mut current = target.get().pose;
                let interval = Interval::new(frame_ms, move || {
                    let goal = target.get();
                    current = current.approach(&goal.pose, EASING_SPEED, goal.scroll_offset);
                    if let Some(el) = node.cast::<HtmlElement>() {
                        let _ = el.set_attribute(
                            "style",
                            &format!(
                                "transform: {}; opacity: {};",
                                current.css_transform(),
                                if current.visible { 1 } else { 0 }
                            ),
                        );
                    }
                });
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <div class="can-stage" aria-hidden="true">
            <style>
                {r#"
                    .can-stage {
                        position: fixed;
                        inset: 0;
                        pointer-events: none;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        perspective: 1200px;
                        z-index: 5;
                    }
                    .can-stage img {
                        height: 40vh;
                        transition: opacity 0.4s;
                        will-change: transform;
                    }
                "#}
            </style>
            <img ref={node} src="/images/steez-pink-can.png" alt="" />
        </div>
    }
}
