//! Fixed deck content: every title, bullet, URL, and data series.

use crate::slides::Bullet;

pub const OUTPUT_FILE: &str = "why_vine_failed.pptx";
pub const USERS_CHART_FILE: &str = "vine_users.png";
pub const ENGAGEMENT_CHART_FILE: &str = "vine_engagement.png";

pub const TITLE: &str = "Why Vine Failed";
pub const SUBTITLE: &str = "An auto-generated retrospective";

pub const LOGO_URL: &str =
    "https://variety.com/wp-content/uploads/2013/10/vine-logo.jpg?w=1000&h=563&crop=1";
pub const EXPLORE_URL: &str =
    "https://techcrunch.com/wp-content/uploads/2013/07/capture-explore.jpg";
pub const INFOGRAPHIC_URL: &str = "https://cdn.statcdn.com/Infographic/images/normal/1553.jpeg";
pub const COMPARISON_URL: &str = "https://www.360psg.com/content/images/Vine-vs-Instagram.jpg";
pub const EULOGY_URL: &str = "https://media-cldnry.s-nbcnews.com/image/upload/t_nbcnews-fp-1200-630,f_auto,q_auto:best/rockcms/2022-01/220114-vine-eulogy-social-cs-dc5e98.png";

pub const CHART_MONTHS: [&str; 6] = [
    "Jan '13", "Jun '13", "Dec '13", "Dec '14", "Dec '15", "Jan '17",
];
pub const USERS_MILLIONS: [f64; 6] = [1.0, 13.0, 40.0, 100.0, 200.0, 0.0];
pub const ENGAGEMENT_PCT: [f64; 6] = [85.0, 78.0, 72.0, 60.0, 35.0, 0.0];

pub const USERS_CHART_TITLE: &str = "Vine Registered Users (Millions) \u{2013} Illustrative";
pub const ENGAGEMENT_CHART_TITLE: &str = "Vine Engagement Rate \u{2013} Illustrative";

/// 6in x 3.5in figure at 200 dpi.
pub const CHART_SIZE_PX: (u32, u32) = (1200, 700);

pub const CORE_FEATURES: [Bullet; 5] = [
    Bullet::Plain("6-second looping videos"),
    Bullet::Plain("Easy uploading and browsing on mobile"),
    Bullet::Plain("Instant sharing to Twitter/Facebook"),
    Bullet::Plain("Simple interface, minimal editing features"),
    Bullet::Plain("Allowed multiple 'takes' per vine"),
];

pub const MILESTONES: [Bullet; 5] = [
    Bullet::Plain("Launch: Jan 2013 on iOS, later Android/Xbox"),
    Bullet::Plain("Reached 40M users within a year"),
    Bullet::Plain("Trendsetting among comedians, musicians, and meme creators"),
    Bullet::Plain("Extremely young user base (teens, Gen Z)"),
    Bullet::Plain("Acquired by Twitter before launch"),
];

pub const PEAK_POPULARITY: [Bullet; 5] = [
    Bullet::Plain("Attracted celebrities and brands for viral content"),
    Bullet::Plain("Became a meme powerhouse, launching internet stars"),
    Bullet::Plain("Many creators broke out to mainstream fame"),
    Bullet::Plain("Community culture: 'Viners', collaborations, trends"),
    Bullet::Plain("Daily active users peaked around 30M in 2014-2015"),
];

pub const COMPETITIVE_PRESSURES: [Bullet; 5] = [
    Bullet::Plain("Instagram launched video ~6 months after Vine"),
    Bullet::Plain("Snapchat took over ephemeral creativity"),
    Bullet::Plain("Rise of Musical.ly/TikTok: longer content, more flexibility"),
    Bullet::Plain("Other platforms had monetization built-in"),
    Bullet::Plain("YouTube and IG attracted top Vine creators"),
];

pub const BUSINESS_MODEL: [Bullet; 5] = [
    Bullet::Plain("No revenue sharing or creator funds"),
    Bullet::Plain("No ad network or influencer partnerships"),
    Bullet::Plain("Extremely limited monetization options for top users"),
    Bullet::Plain("Relied solely on parent (Twitter) for financial support"),
    Bullet::Plain("No innovation in paid features or expansion"),
];

pub const POSITIONING: [Bullet; 5] = [
    Bullet::Plain("Short videos became less distinctive over time"),
    Bullet::Plain("Lacked editing/effects: TikTok became more creative"),
    Bullet::Plain("Brand did not adapt to creator needs"),
    Bullet::Plain("Celebrity and advertising appeal faded in late years"),
    Bullet::Plain("No response to algorithmic content discovery revolution"),
];

pub const EXECUTION_GAPS: [Bullet; 5] = [
    Bullet::Plain("Slow to adapt to feature requests (e.g., longer clips)"),
    Bullet::Plain("Weak outreach/support for top creators"),
    Bullet::Plain("Leadership turnover post-acquisition"),
    Bullet::Plain("Poor integration with Twitter ecosystem"),
    Bullet::Plain("Minimal feedback loops for user engagement"),
];

pub const MISSED_OPPORTUNITIES: [Bullet; 3] = [
    Bullet::Plain("Could not pivot to trends like vines on YouTube"),
    Bullet::Plain("Neglected tools for remixing and duets"),
    Bullet::Plain("Few attempts at international growth"),
];

pub const HOW_RIVALS_WON: [Bullet; 4] = [
    Bullet::Plain("Longer videos and better editing tools"),
    Bullet::Plain("Algorithmic content recommendation and discovery"),
    Bullet::Plain("Direct and indirect monetization opportunities"),
    Bullet::Plain("Richer social network, discovery, and sharing"),
];

pub const THANK_YOU: [Bullet; 3] = [
    Bullet::Plain("Generated with deck-pptx + plotters"),
    Bullet::Plain("Team: <your names here>"),
    Bullet::Plain("GitHub repo: <link here>"),
];

pub const QUOTE: &str = "Vine made us stars, but didn\u{2019}t help us make a living.";
pub const QUOTE_SOURCE: &str = "Popular former Viner";
