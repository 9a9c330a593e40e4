use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct Testimonial {
    pub quote: AttrValue,
    pub author: AttrValue,
    pub role: AttrValue,
}

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current % len + len - 1) % len
    }
}

/// Slide the timer should move to, or `None` when nothing should advance.
pub fn auto_advance_target(current: usize, len: usize, paused: bool) -> Option<usize> {
    (!paused && len > 1).then(|| next_index(current, len))
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCarouselProps {
    pub testimonials: Vec<Testimonial>,
    #[prop_or(5000)]
    pub interval_ms: u32,
}

#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel(props: &TestimonialCarouselProps) -> Html {
    let index = use_state(|| 0usize);
    let paused = use_state(|| false);
    let len = props.testimonials.len();
    let interval_ms = props.interval_ms;

    // re-armed after every move, so manual navigation restarts the countdown
    {
        let setter = index.setter();
        use_effect_with_deps(
            move |(current, paused)| {
                let timeout = auto_advance_target(*current, len, *paused)
                    .map(|next| Timeout::new(interval_ms, move || setter.set(next)));
                move || drop(timeout)
            },
            (*index, *paused),
        );
    }

    let go_prev = {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| index.set(prev_index(*index, len)))
    };
    let go_next = {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| index.set(next_index(*index, len)))
    };
    let on_enter = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(true))
    };
    let on_leave = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(false))
    };

    let Some(current) = props.testimonials.get(*index % len.max(1)) else {
        return html! {};
    };

    html! {
        <div class="testimonials" onmouseenter={on_enter} onmouseleave={on_leave}>
            <blockquote class="testimonial" key={*index}>
                <p class="testimonial-quote">{"“"}{current.quote.clone()}{"”"}</p>
                <footer>
                    <span class="testimonial-author">{current.author.clone()}</span>
                    <span class="testimonial-role">{current.role.clone()}</span>
                </footer>
            </blockquote>
            <div class="testimonial-controls">
                <button class="testimonial-arrow" onclick={go_prev} aria-label="Previous testimonial">{"←"}</button>
                <div class="testimonial-dots">
                    { for (0..len).map(|i| {
                        let index = index.clone();
                        let active = i == *index;
                        html! {
                            <button
                                class={classes!("testimonial-dot", active.then(|| "active"))}
                                onclick={Callback::from(move |_: MouseEvent| index.set(i))}
                                aria-label={format!("Show testimonial {}", i + 1)}
                            />
                        }
                    }) }
                </div>
                <button class="testimonial-arrow" onclick={go_next} aria-label="Next testimonial">{"→"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 0);
    }

    #[test]
    fn test_prev_wraps() {
        assert_eq!(prev_index(0, 3), 2);
        assert_eq!(prev_index(1, 3), 0);
    }

    #[test]
    fn test_single_and_empty() {
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(prev_index(0, 1), 0);
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(5, 0), 0);
    }

    #[test]
    fn test_auto_advance_target() {
        assert_eq!(auto_advance_target(0, 3, false), Some(1));
        assert_eq!(auto_advance_target(2, 3, false), Some(0));
        assert_eq!(auto_advance_target(1, 3, true), None);
        assert_eq!(auto_advance_target(0, 1, false), None);
        assert_eq!(auto_advance_target(0, 0, false), None);
    }

    #[test]
    fn test_prev_tolerates_out_of_range_index() {
        assert_eq!(prev_index(7, 3), 0);
    }
}
