use web_sys::Element;
use yew::prelude::*;

use super::animation::{CounterConfig, DEFAULT_DURATION_MS};
use super::format::CounterFormat;
use super::frame::AnimationFrameScheduler;
use super::mount::{CounterSink, MountedCounter};
use super::visibility::IntersectionVisibility;

/// Snapshot returned by [`use_count_up`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    pub value: f64,
    pub visible: bool,
}

impl CountUp {
    pub fn text(&self, format: &CounterFormat) -> String {
        if self.visible {
            format.render(self.value)
        } else {
            format.render_placeholder()
        }
    }
}

/// Counts from zero to `end` once the element behind `node` scrolls into
/// view. Observer and frame loop are released when the component unmounts
/// or when `end`/`duration_ms` change; a change puts the display back on
/// the placeholder until the element is seen again.
#[hook]
pub fn use_count_up(node: NodeRef, end: f64, duration_ms: f64) -> CountUp {
    let value = use_state_eq(|| 0.0_f64);
    let visible = use_state_eq(|| false);

    {
        let value = value.setter();
        let visible = visible.setter();
        use_effect_with_deps(
            move |(end, duration_ms)| {
                let config = CounterConfig::new(*end).duration_ms(*duration_ms);
                let sink = CounterSink {
                    on_reset: Box::new({
                        let value = value.clone();
                        let visible = visible.clone();
                        move || {
                            value.set(0.0);
                            visible.set(false);
                        }
                    }),
                    on_visible: Box::new(move || visible.set(true)),
                    on_frame: Box::new(move |v| value.set(v)),
                };
                let mounted = MountedCounter::mount(
                    config,
                    AnimationFrameScheduler,
                    IntersectionVisibility::new(node.cast::<Element>()),
                    sink,
                );

                move || drop(mounted)
            },
            (end, duration_ms),
        );
    }

    CountUp {
        value: *value,
        visible: *visible,
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub end: f64,
    #[prop_or(DEFAULT_DURATION_MS)]
    pub duration: f64,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub decimals: usize,
    /// Passed straight through to the rendered span.
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let count = use_count_up(node.clone(), props.end, props.duration);
    let format = CounterFormat::new(props.prefix.to_string(), props.suffix.to_string(), props.decimals);

    html! {
        <span ref={node} class={props.class.clone()}>{count.text(&format)}</span>
    }
}
