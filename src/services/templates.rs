//! Headline templates. `{name}` and `{location}` are the only placeholders.

pub const NAME_PLACEHOLDER: &str = "{name}";
pub const LOCATION_PLACEHOLDER: &str = "{location}";

/// Headlines offered with a freshly generated report.
pub const REPORT_HEADLINES: [&str; 10] = [
    "Why {name} is {location}'s Best-Kept Secret in 2024",
    "{name}: The Ultimate {location} Experience You've Been Missing",
    "Discover Why {name} is Taking {location} by Storm",
    "{name} - {location}'s Premier Destination for Excellence",
    "The Complete Guide to {name}: {location}'s Hidden Gem",
    "{name} Revolutionizes the {location} Scene - Here's How",
    "Why Locals Choose {name} Over Any Other {location} Business",
    "{name}: Setting New Standards in {location} Since 2024",
    "The {name} Difference: What Makes This {location} Business Special",
    "{name} - Where Quality Meets Excellence in {location}",
];

/// Headlines offered when only the headline is regenerated.
pub const REGENERATED_HEADLINES: [&str; 20] = [
    "{name}: The {location} Success Story Everyone's Talking About",
    "How {name} Became {location}'s Most Trusted Business",
    "{name} - Redefining Excellence in {location}",
    "The {name} Phenomenon: Why {location} Can't Stop Raving",
    "{name}: Your Gateway to the Best {location} Has to Offer",
    "Breaking: {name} Wins Hearts Across {location}",
    "{name} - The {location} Business That's Changing Everything",
    "Why {name} is {location}'s Rising Star in 2024",
    "{name}: Where Innovation Meets Tradition in {location}",
    "The {name} Revolution: Transforming {location} One Customer at a Time",
    "{name} - {location}'s Answer to Quality and Service",
    "Exclusive: How {name} Conquered the {location} Market",
    "{name}: The {location} Destination That Exceeds Expectations",
    "Why Smart {location} Residents Choose {name} Every Time",
    "{name} - Building Tomorrow's {location} Today",
    "The Ultimate {name} Experience: {location}'s Best-Kept Secret Revealed",
    "{name}: Leading the Charge in {location}'s Business Renaissance",
    "How {name} is Putting {location} on the Map",
    "{name} - Where {location} Dreams Come True",
    "The {name} Advantage: What Sets This {location} Business Apart",
];

/// Fills both placeholders in a single pass, so placeholder text inside
/// `name` or `location` is left as-is.
pub fn render(template: &str, name: &str, location: &str) -> String {
    template
        .split(NAME_PLACEHOLDER)
        .map(|segment| segment.replace(LOCATION_PLACEHOLDER, location))
        .collect::<Vec<_>>()
        .join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_uses_both_placeholders() {
        for template in REPORT_HEADLINES.iter().chain(REGENERATED_HEADLINES.iter()) {
            assert!(template.contains(NAME_PLACEHOLDER), "{template}");
            assert!(template.contains(LOCATION_PLACEHOLDER), "{template}");
        }
    }

    #[test]
    fn test_template_lists_do_not_overlap() {
        for template in REPORT_HEADLINES {
            assert!(!REGENERATED_HEADLINES.contains(&template), "{template}");
        }
    }

    #[test]
    fn test_render_simple() {
        assert_eq!(
            render(REPORT_HEADLINES[0], "Cake & Co", "Mumbai"),
            "Why Cake & Co is Mumbai's Best-Kept Secret in 2024"
        );
    }

    #[test]
    fn test_render_repeated_placeholders() {
        assert_eq!(render("{name} {location} {name}", "A", "B"), "A B A");
    }

    #[test]
    fn test_render_does_not_expand_user_input() {
        assert_eq!(
            render("{name} in {location}", "{location}", "{name}"),
            "{location} in {name}"
        );
    }
}
