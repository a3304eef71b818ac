use leptos::*;
use leptos::ev::SubmitEvent;
use crate::models::review::{CategoryRatings, RatingCategory, ReviewDraft};

/// Parse the overall-rating input, clamping to the valid 1.0..=5.0 range.
/// The HTML min/max attributes only constrain the spinner, not typed input.
fn parse_rating(input: &str) -> f64 {
    input
        .parse::<f64>()
        .map(|value| value.clamp(1.0, 5.0))
        .unwrap_or(5.0)
}

#[component]
pub fn ReviewForm(on_submit: Box<dyn Fn(ReviewDraft)>) -> impl IntoView {
    let (title, set_title) = create_signal(String::new());
    let (content, set_content) = create_signal(String::new());
    let (rating, set_rating) = create_signal(5.0f64); // Default rating to 5
    let (cleanliness, set_cleanliness) = create_signal(5u8);
    let (location, set_location) = create_signal(5u8);
    let (price, set_price) = create_signal(5u8);
    let (facilities, set_facilities) = create_signal(5u8);
    let (safety, set_safety) = create_signal(5u8);

    let category_select = move |category: RatingCategory, setter: WriteSignal<u8>| {
        view! {
            <label class="category-field">
                { category.label() }
                <select on:change=move |e| {
                    setter.set(event_target_value(&e).parse::<u8>().unwrap_or(5))
                }>
                    { (1..=5u8).map(|score| view! {
                        <option value=score.to_string() selected={score == 5}>
                            { score.to_string() }
                        </option>
                    }).collect::<Vec<_>>() }
                </select>
            </label>
        }
    };

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit(ReviewDraft {
            rating: rating.get(),
            category_ratings: CategoryRatings {
                cleanliness: cleanliness.get(),
                location: location.get(),
                price: price.get(),
                facilities: facilities.get(),
                safety: safety.get(),
            },
            title: title.get(),
            content: content.get(),
        });

        // Reset values
        set_title.set(String::new());
        set_content.set(String::new());
        set_rating.set(5.0);
        set_cleanliness.set(5);
        set_location.set(5);
        set_price.set(5);
        set_facilities.set(5);
        set_safety.set(5);
    };

    view! {
        <form class="review-form" on:submit=handle_submit>
            <h3>{ "Write a Review" }</h3>
            <input
                type="text"
                placeholder="Title"
                prop:value=title
                on:input=move |e| set_title.set(event_target_value(&e))
            />
            <textarea
                placeholder="Tell others about your stay"
                prop:value=content
                on:input=move |e| set_content.set(event_target_value(&e))
            />
            <label>
                { "Overall rating" }
                <input
                    type="number"
                    min="1"
                    max="5"
                    step="0.5"
                    prop:value=move || rating.get().to_string()
                    on:input=move |e| set_rating.set(parse_rating(&event_target_value(&e)))
                />
            </label>
            <fieldset class="category-ratings">
                <legend>{ "Rate each category" }</legend>
                { category_select(RatingCategory::Cleanliness, set_cleanliness) }
                { category_select(RatingCategory::Location, set_location) }
                { category_select(RatingCategory::Price, set_price) }
                { category_select(RatingCategory::Facilities, set_facilities) }
                { category_select(RatingCategory::Safety, set_safety) }
            </fieldset>
            <button type="submit">{ "Submit Review" }</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::parse_rating;

    #[test]
    fn typed_ratings_are_clamped_to_the_valid_range() {
        assert_eq!(parse_rating("9"), 5.0);
        assert_eq!(parse_rating("0.5"), 1.0);
        assert_eq!(parse_rating("-3"), 1.0);
    }

    #[test]
    fn in_range_ratings_parse_as_is() {
        assert_eq!(parse_rating("4.5"), 4.5);
        assert_eq!(parse_rating("1"), 1.0);
        assert_eq!(parse_rating("5"), 5.0);
    }

    #[test]
    fn garbage_input_falls_back_to_the_default() {
        assert_eq!(parse_rating(""), 5.0);
        assert_eq!(parse_rating("four"), 5.0);
    }
}
