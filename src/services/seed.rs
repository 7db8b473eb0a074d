//! Built-in sample data used when no data files are configured.

use std::collections::HashMap;

use crate::models::{FundingStage, InvestmentRange, Investor, NetworkProfile};
use crate::services::network::NetworkData;

use crate::models::FundingStage::*;

#[allow(clippy::too_many_arguments)]
fn investor(
    id: &str,
    name: &str,
    firm: &str,
    title: &str,
    handle: &str,
    domain: &str,
    focus: &[&str],
    stages: &[FundingStage],
    range: (f64, f64),
    geo: &[&str],
    portfolio: &[&str],
    thesis: &str,
) -> Investor {
    let slug = name.to_lowercase().replace(' ', "");
    Investor {
        id: id.to_string(),
        name: name.to_string(),
        firm: firm.to_string(),
        title: Some(title.to_string()),
        email: Some(format!("{}@{}", handle, domain)),
        linkedin: Some(format!("https://linkedin.com/in/{}", slug)),
        focus: focus.iter().map(|s| s.to_string()).collect(),
        stages: stages.to_vec(),
        investment_range: InvestmentRange { min: range.0, max: range.1 },
        geographic_preferences: geo.iter().map(|s| s.to_string()).collect(),
        portfolio: portfolio.iter().map(|s| s.to_string()).collect(),
        thesis: Some(thesis.to_string()),
        actively_investing: true,
    }
}

/// Sample investor table
pub fn investors() -> Vec<Investor> {
    vec![
        investor(
            "1", "Sarah Chen", "Andreessen Horowitz", "Partner", "schen", "a16z.com",
            &["Enterprise SaaS", "AI/ML"], &[SeriesA, SeriesB], (3_000_000.0, 15_000_000.0),
            &["North America", "Europe"], &["Databricks", "Notion", "Figma"],
            "Investing in enterprise software companies transforming how teams collaborate and work",
        ),
        investor(
            "2", "Michael Rodriguez", "Sequoia Capital", "General Partner", "mrodriguez", "sequoiacap.com",
            &["FinTech", "Consumer Tech"], &[Seed, SeriesA], (1_000_000.0, 10_000_000.0),
            &["Global"], &["Stripe", "Coinbase", "Plaid"],
            "Backing founders building the future of financial infrastructure and consumer finance",
        ),
        investor(
            "3", "Jennifer Liu", "Benchmark", "Partner", "jliu", "benchmark.com",
            &["E-commerce", "Consumer Tech"], &[SeriesA, SeriesB], (5_000_000.0, 20_000_000.0),
            &["North America"], &["Snapchat", "Uber", "Instagram"],
            "Investing in consumer platforms that change how people live and interact",
        ),
        investor(
            "4", "David Park", "Khosla Ventures", "Managing Director", "dpark", "khoslaventures.com",
            &["HealthTech", "AI/ML", "CleanTech"], &[Seed, SeriesA, SeriesB], (2_000_000.0, 25_000_000.0),
            &["North America", "Europe"], &["23andMe", "Impossible Foods", "Affirm"],
            "Supporting breakthrough technologies in health, climate, and AI",
        ),
        investor(
            "5", "Emma Watson", "Accel Partners", "Partner", "ewatson", "accel.com",
            &["Enterprise SaaS", "Developer Tools"], &[SeriesA, SeriesB, SeriesC], (10_000_000.0, 50_000_000.0),
            &["North America", "Europe"], &["Slack", "Atlassian", "UiPath"],
            "Investing in developer-first and enterprise infrastructure companies",
        ),
        investor(
            "6", "James Anderson", "Y Combinator", "Partner", "janderson", "ycombinator.com",
            &["Enterprise SaaS", "Consumer Tech", "FinTech", "HealthTech"], &[PreSeed, Seed], (50_000.0, 500_000.0),
            &["Global"], &["Airbnb", "Dropbox", "Stripe"],
            "Backing ambitious founders at the earliest stages across all sectors",
        ),
        investor(
            "7", "Priya Patel", "Index Ventures", "Partner", "ppatel", "indexventures.com",
            &["FinTech", "Enterprise SaaS"], &[SeriesA, SeriesB], (5_000_000.0, 30_000_000.0),
            &["Europe", "North America"], &["Revolut", "TransferWise", "Adyen"],
            "Partnering with European and global founders building category-defining companies",
        ),
        investor(
            "8", "Robert Kim", "Lightspeed Venture Partners", "General Partner", "rkim", "lsvp.com",
            &["AI/ML", "Enterprise SaaS"], &[Seed, SeriesA], (2_000_000.0, 12_000_000.0),
            &["North America", "Asia"], &["Affirm", "Guardant Health", "AppDynamics"],
            "Investing in next-generation enterprise and AI-first companies",
        ),
        investor(
            "9", "Lisa Thompson", "Greylock Partners", "Partner", "lthompson", "greylock.com",
            &["Consumer Tech", "Social Media", "E-commerce"], &[SeriesA, SeriesB], (8_000_000.0, 25_000_000.0),
            &["North America"], &["LinkedIn", "Airbnb", "Discord"],
            "Backing founders creating new consumer experiences and communities",
        ),
        investor(
            "10", "Alex Johnson", "First Round Capital", "Partner", "ajohnson", "firstround.com",
            &["Enterprise SaaS", "Developer Tools", "FinTech"], &[PreSeed, Seed], (100_000.0, 1_000_000.0),
            &["North America"], &["Uber", "Warby Parker", "Square"],
            "Investing in exceptional founders at the earliest stages",
        ),
        investor(
            "11", "Rachel Green", "NEA (New Enterprise Associates)", "General Partner", "rgreen", "nea.com",
            &["HealthTech", "FinTech"], &[SeriesA, SeriesB, SeriesC], (10_000_000.0, 50_000_000.0),
            &["North America", "Europe"], &["Robinhood", "Oscar Health", "Coursera"],
            "Investing in transformative healthcare and financial services companies",
        ),
        investor(
            "12", "Tom Wilson", "GV (Google Ventures)", "Partner", "twilson", "gv.com",
            &["AI/ML", "Enterprise SaaS", "HealthTech"], &[SeriesA, SeriesB, SeriesC], (5_000_000.0, 40_000_000.0),
            &["North America", "Europe"], &["Uber", "Slack", "Flatiron Health"],
            "Backing ambitious teams leveraging AI and technology to transform industries",
        ),
        investor(
            "13", "Nina Patel", "Insight Partners", "Managing Director", "npatel", "insightpartners.com",
            &["Enterprise SaaS", "E-commerce"], &[SeriesB, SeriesC, GrowthEquity], (20_000_000.0, 100_000_000.0),
            &["Global"], &["Twitter", "Shopify", "HelloFresh"],
            "Scaling high-growth software and internet businesses globally",
        ),
        investor(
            "14", "Carlos Martinez", "Tiger Global", "Partner", "cmartinez", "tigerglobal.com",
            &["FinTech", "E-commerce", "Consumer Tech"], &[SeriesB, SeriesC, GrowthEquity], (25_000_000.0, 150_000_000.0),
            &["Global"], &["Stripe", "Chime", "Flipkart"],
            "Investing in category-leading internet and software companies worldwide",
        ),
        investor(
            "15", "Sofia Andersson", "Balderton Capital", "Partner", "sandersson", "balderton.com",
            &["Enterprise SaaS", "FinTech", "E-commerce"], &[SeriesA, SeriesB], (5_000_000.0, 20_000_000.0),
            &["Europe"], &["Revolut", "Citymapper", "GoCardless"],
            "Partnering with European entrepreneurs building global businesses",
        ),
    ]
}

fn person(id: &str, name: &str, title: &str, company: &str, location: &str, handle: &str, connections: u32) -> NetworkProfile {
    NetworkProfile {
        id: id.to_string(),
        name: name.to_string(),
        title: Some(title.to_string()),
        company: Some(company.to_string()),
        location: Some(location.to_string()),
        linkedin_url: Some(format!("https://linkedin.com/in/{}", handle)),
        connections,
    }
}

/// Sample founder-to-investor network
///
/// founder1 reaches vc1 and vc2 in two hops through advisor1, and vc3 and
/// vc4 in three hops through several routes.
pub fn network() -> NetworkData {
    let profiles = vec![
        person("founder1", "John Founder", "CEO & Co-founder", "TechStartup Inc.", "San Francisco, CA", "johnfounder", 850),
        person("advisor1", "Maria Advisor", "Startup Advisor", "Independent", "San Francisco, CA", "mariaadvisor", 1200),
        person("founder2", "Alex Fellow-Founder", "CEO", "Another Startup", "San Francisco, CA", "alexfounder", 950),
        person("engineer1", "Sam Engineer", "Senior Engineer", "Google", "Mountain View, CA", "samengineer", 600),
        person("vc1", "Sarah Chen", "Partner", "Andreessen Horowitz", "Menlo Park, CA", "sarahchen", 2500),
        person("vc2", "Michael Rodriguez", "General Partner", "Sequoia Capital", "Menlo Park, CA", "michaelrodriguez", 3200),
        person("executive1", "Lisa Executive", "VP Product", "Stripe", "San Francisco, CA", "lisaexecutive", 1800),
        person("vc3", "David Park", "Managing Director", "Khosla Ventures", "Menlo Park, CA", "davidpark", 2100),
        person("vc4", "Emma Watson", "Partner", "Accel Partners", "Palo Alto, CA", "emmawatson", 2800),
        person("connector1", "Bob Connector", "Investment Partner", "Venture Network", "San Francisco, CA", "bobconnector", 1500),
        person("mentor1", "Jane Mentor", "CEO", "Successful Startup", "San Francisco, CA", "janementor", 2200),
    ];

    let edges: &[(&str, &[&str])] = &[
        ("founder1", &["advisor1", "founder2", "engineer1"]),
        ("advisor1", &["founder1", "vc1", "vc2", "executive1", "connector1"]),
        ("founder2", &["founder1", "executive1", "mentor1"]),
        ("engineer1", &["founder1", "executive1"]),
        ("vc1", &["advisor1", "connector1", "vc3", "vc4"]),
        ("vc2", &["advisor1", "mentor1", "vc3"]),
        ("executive1", &["advisor1", "founder2", "engineer1", "vc2", "mentor1"]),
        ("connector1", &["advisor1", "vc1", "vc4", "mentor1"]),
        ("mentor1", &["founder2", "executive1", "vc2", "connector1", "vc3", "vc4"]),
        ("vc3", &["vc1", "vc2", "mentor1"]),
        ("vc4", &["vc1", "connector1", "mentor1"]),
    ];

    let connections: HashMap<String, Vec<String>> = edges
        .iter()
        .map(|(id, ids)| (id.to_string(), ids.iter().map(|s| s.to_string()).collect()))
        .collect();

    NetworkData { profiles, connections }
}
