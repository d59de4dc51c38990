use super::*;

/// Accessible summary for a star row.
pub(crate) fn rating_label(rating: f32) -> String {
    format!("Rated {rating:.1} out of 5")
}

#[component]
/// Five-star row with an optional review count.
pub fn StarRow(
    rating: f32,
    #[prop(optional)] reviews_count: Option<u32>,
) -> impl IntoView {
    let stars = StarRating::from_rating(rating);
    let full = (0..stars.full)
        .map(|_| view! { <Icon icon=IconName::Star size=IconSize::Sm /> })
        .collect_view();
    let half = stars
        .half
        .then(|| view! { <Icon icon=IconName::StarHalf size=IconSize::Sm /> });
    let empty = (0..stars.empty)
        .map(|_| view! { <Icon icon=IconName::StarOutline size=IconSize::Sm /> })
        .collect_view();

    view! {
        <div class="star-row" data-ui-kind="star-row">
            <span data-ui-slot="stars" role="img" aria-label=rating_label(rating)>
                {full}
                {half}
                {empty}
            </span>
            {reviews_count.map(|count| view! {
                <Text role=TextRole::Caption tone=TextTone::Secondary>
                    {format!("({count} reviews)")}
                </Text>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn label_rounds_to_one_decimal() {
        assert_eq!(rating_label(4.5), "Rated 4.5 out of 5");
        assert_eq!(rating_label(4.0), "Rated 4.0 out of 5");
    }
}
