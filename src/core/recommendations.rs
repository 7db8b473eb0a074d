use crate::models::{ConnectionPath, NetworkProfile};

/// Recommendations returned when no path exists within the depth bound
pub const UNREACHABLE_RECOMMENDATIONS: [&str; 4] = [
    "No direct connection path found within your network",
    "Consider attending events where this investor speaks",
    "Engage with their content on social media",
    "Seek warm introductions through your advisors or other founders",
];

pub fn unreachable_recommendations() -> Vec<String> {
    UNREACHABLE_RECOMMENDATIONS.iter().map(|s| s.to_string()).collect()
}

/// Approach text keyed on the number of profiles in the path
pub fn approach_for_path(path: &[NetworkProfile]) -> String {
    match path {
        [_, _] => "**Direct Connection**: Reach out directly via LinkedIn message or email.".to_string(),
        [_, intermediary, _] => format!(
            "**One Introduction Away**: Ask {}{} for an introduction. They're directly connected to your target.",
            intermediary.name,
            company_suffix(intermediary, " (", ")")
        ),
        [_, first, second, _] => format!(
            "**Two-Step Introduction**:\n\
             1. First, connect with {}{}\n\
             2. Ask them to introduce you to {}{}\n\
             3. Finally, {} can introduce you to your target investor",
            first.name,
            company_suffix(first, " at ", ""),
            second.name,
            company_suffix(second, " at ", ""),
            second.name
        ),
        _ => format!(
            "**Long Path ({} connections)**: Consider alternative approaches like cold email with strong social proof, or attending events where this investor will be present.",
            path.len().saturating_sub(1)
        ),
    }
}

fn company_suffix(profile: &NetworkProfile, open: &str, close: &str) -> String {
    profile
        .company
        .as_deref()
        .map(|c| format!("{}{}{}", open, c, close))
        .unwrap_or_default()
}

/// Action items for the best path, most specific for short paths
pub fn recommendations_for_path(path: &ConnectionPath) -> Vec<String> {
    let mut recommendations = Vec::new();
    let first_hop = path.path.get(1).map(|p| p.name.as_str()).unwrap_or("your first connection");

    match path.degree {
        1 => {
            recommendations.push(
                "You are directly connected! Send a personalized message explaining your startup and asking for a meeting."
                    .to_string(),
            );
            recommendations
                .push("Reference any common interests or mutual connections in your outreach.".to_string());
        }
        2 => {
            recommendations.push(format!("Reach out to {} and ask for an introduction.", first_hop));
            recommendations.push(format!(
                "Prepare a brief 2-3 sentence description of your startup to share with {}.",
                first_hop
            ));
            recommendations.push(
                "Offer to send materials that would make the introduction easy (deck, one-pager).".to_string(),
            );
        }
        _ => {
            recommendations.push(format!(
                "Work through your connection path systematically, starting with {}.",
                first_hop
            ));
            recommendations
                .push("Build relationships at each step rather than asking for immediate introductions.".to_string());
            recommendations
                .push("Consider parallel approaches: cold email, social media engagement, events.".to_string());
        }
    }

    if let Some(first_mutual) = path.mutual_connections.first() {
        recommendations.push(format!(
            "You have {} mutual connection(s) including {} - this strengthens your ask.",
            path.mutual_connections.len(),
            first_mutual.name
        ));
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: &str, company: Option<&str>) -> NetworkProfile {
        NetworkProfile {
            id: id.to_string(),
            name: format!("Person {}", id),
            title: None,
            company: company.map(String::from),
            location: None,
            linkedin_url: None,
            connections: 10,
        }
    }

    fn path_of(profiles: Vec<NetworkProfile>, mutual: Vec<NetworkProfile>) -> ConnectionPath {
        ConnectionPath {
            target: profiles[profiles.len() - 1].clone(),
            degree: profiles.len() - 1,
            strength: 100,
            recommended_approach: approach_for_path(&profiles),
            mutual_connections: mutual,
            path: profiles,
        }
    }

    #[test]
    fn test_approach_direct() {
        let text = approach_for_path(&[person("a", None), person("b", None)]);
        assert!(text.starts_with("**Direct Connection**"));
    }

    #[test]
    fn test_approach_one_intro_names_intermediary() {
        let text = approach_for_path(&[person("a", None), person("b", Some("Stripe")), person("c", None)]);
        assert!(text.contains("Ask Person b (Stripe) for an introduction"));

        let text = approach_for_path(&[person("a", None), person("b", None), person("c", None)]);
        assert!(text.contains("Ask Person b for an introduction"));
    }

    #[test]
    fn test_approach_two_step_names_both() {
        let text = approach_for_path(&[
            person("a", None),
            person("b", Some("Google")),
            person("c", None),
            person("d", None),
        ]);
        assert!(text.contains("1. First, connect with Person b at Google"));
        assert!(text.contains("2. Ask them to introduce you to Person c\n"));
        assert!(text.contains("3. Finally, Person c can introduce you"));
    }

    #[test]
    fn test_approach_long_path() {
        let profiles: Vec<NetworkProfile> = (0..5).map(|i| person(&i.to_string(), None)).collect();
        assert!(approach_for_path(&profiles).starts_with("**Long Path (4 connections)**"));
    }

    #[test]
    fn test_recommendations_by_degree() {
        let direct = path_of(vec![person("a", None), person("b", None)], vec![]);
        assert_eq!(recommendations_for_path(&direct).len(), 2);

        let one_hop = path_of(vec![person("a", None), person("b", None), person("c", None)], vec![]);
        let recs = recommendations_for_path(&one_hop);
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0], "Reach out to Person b and ask for an introduction.");

        let long = path_of((0..4).map(|i| person(&i.to_string(), None)).collect(), vec![]);
        let recs = recommendations_for_path(&long);
        assert!(recs[0].contains("starting with Person 1"));
    }

    #[test]
    fn test_mutual_callout() {
        let path = path_of(
            vec![person("a", None), person("b", None), person("c", None)],
            vec![person("b", None), person("m", None)],
        );
        let recs = recommendations_for_path(&path);
        assert_eq!(
            recs.last().map(String::as_str),
            Some("You have 2 mutual connection(s) including Person b - this strengthens your ask.")
        );
    }

    #[test]
    fn test_unreachable_list() {
        assert_eq!(unreachable_recommendations().len(), 4);
    }
}
