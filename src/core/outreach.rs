use crate::models::NetworkAnalysis;

/// Render a markdown outreach plan for a network analysis
pub fn outreach_strategy(analysis: &NetworkAnalysis) -> String {
    let mut out = format!("# Outreach Strategy for {}\n\n", analysis.target);

    let Some(best) = analysis.best_path.as_ref().filter(|_| analysis.reachable) else {
        out.push_str("## Cold Outreach Approach\n\n");
        out.push_str("Since you're not connected through LinkedIn, here's a multi-channel approach:\n\n");
        out.push_str("### 1. LinkedIn Cold Message\n");
        out.push_str("- Keep it brief (2-3 sentences)\n- Lead with value/traction\n- Specific ask for 15-minute call\n\n");
        out.push_str("### 2. Email Outreach\n");
        out.push_str("- Find a verified email address\n- Strong subject line\n- Include pitch deck link\n\n");
        out.push_str("### 3. Social Proof\n");
        out.push_str("- Engage with their posts/content first\n- Get customer testimonials\n- Highlight notable advisors/investors\n\n");
        return out;
    };

    out.push_str("## Warm Introduction Strategy\n\n");
    let unit = if best.degree == 1 { "connection" } else { "connections" };
    out.push_str(&format!("You're **{} {}** away!\n\n", best.degree, unit));

    let connector = best.intermediaries().first();
    match connector {
        None => {
            out.push_str("### Direct Approach:\n");
            out.push_str("1. **Prepare Your Materials**\n   - Update your pitch deck\n   - Prepare 2-3 sentence elevator pitch\n   - Have key metrics ready\n\n");
            out.push_str("2. **Craft Your Message**\n   - Personalize based on their portfolio\n   - Reference specific companies they've backed\n\n");
            out.push_str("3. **Send on LinkedIn or Email**\n   - Mid-week, mid-morning typically best\n   - Follow up once after 5-7 days if no response\n\n");
        }
        Some(connector) => {
            out.push_str("### Step-by-Step Approach:\n\n");
            out.push_str(&format!("1. **Reach out to {}**\n", connector.name));
            out.push_str("   - Explain why this investor is a fit\n   - Make it easy: offer to draft the intro email\n\n");
            out.push_str("2. **Prepare Introduction Materials**\n   - One-pager or deck\n   - 2-3 sentence blurb for the intro\n   - Recent traction/wins\n\n");
            out.push_str("3. **After Introduction**\n   - Respond within 24 hours\n   - Suggest specific times for call\n   - Thank the introducer\n\n");
        }
    }

    if !best.mutual_connections.is_empty() {
        out.push_str(&format!(
            "### Leverage Your {} Mutual Connection(s):\n\n",
            best.mutual_connections.len()
        ));
        for mutual in &best.mutual_connections {
            let line = match &mutual.company {
                Some(company) => format!("- {} at {}\n", mutual.name, company),
                None => format!("- {}\n", mutual.name),
            };
            out.push_str(&line);
        }
        out.push_str("\nMention these shared connections in your outreach!\n\n");
    }

    out.push_str("## Sample Message Template:\n\n```\n");
    match connector {
        None => {
            out.push_str("Hi [Investor Name],\n\n");
            out.push_str("I'm building [Company] - we're [one-line description]. We just [recent traction/milestone].\n\n");
            out.push_str("Would love 15 minutes to share what we're building.\n\nBest,\n[Your Name]\n");
        }
        Some(connector) => {
            out.push_str(&format!("Hi {},\n\n", connector.name));
            out.push_str(&format!(
                "I'd love your help connecting with {}. We're building [Company] - [one-line description].\n\n",
                analysis.target
            ));
            out.push_str("Happy to send over a deck and draft an intro email if you're comfortable making the connection.\n\nThanks!\n[Your Name]\n");
        }
    }
    out.push_str("```\n\n");

    out.push_str("## Timeline:\n\n");
    out.push_str("- **Week 1**: Prepare materials, reach out to connector\n");
    out.push_str("- **Week 2**: Get introduction, respond promptly\n");
    out.push_str("- **Week 3**: Initial meeting with investor\n");
    out.push_str("- **Week 4**: Follow-up and next steps\n");

    out
}
