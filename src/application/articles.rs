//! Full-text articles behind the dashboard's headlines, looked up by id.

use crate::domain::entities::article_detail::ArticleDetail;
use crate::domain::values::sentiment::Sentiment;
use chrono::{DateTime, Duration, Utc};

struct CatalogEntry {
    id: &'static str,
    title: &'static str,
    source: &'static str,
    category: &'static str,
    author: &'static str,
    impact: Sentiment,
    hours_ago: i64,
    content: &'static str,
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: "1",
        title: "Apple Reports Strong Q4 Earnings, Beats Expectations",
        source: "MarketWatch",
        category: "Earnings",
        author: "Sarah Johnson",
        impact: Sentiment::Positive,
        hours_ago: 2,
        content: "Apple Inc. reported quarterly earnings that exceeded analyst expectations for the fourth quarter, driven by strong iPhone sales and robust performance across its services division.

The tech giant posted revenue of $89.5 billion, up 1% year-over-year, beating consensus estimates of $89.3 billion. iPhone revenue came in at $43.8 billion, slightly below the $43.9 billion expected but showing resilience in a challenging smartphone market.

Services revenue, which includes the App Store, Apple Music, and iCloud, reached a record $22.3 billion, up 16% year-over-year. This segment continues to be Apple's fastest-growing and most profitable division.

\"We are pleased with our performance this quarter, which reflects the strength of our ecosystem and the loyalty of our customers,\" said CEO Tim Cook during the earnings call.

The company's gross margin improved to 45.2% from 43.3% in the same quarter last year, demonstrating effective cost management and favorable product mix.

Mac revenue declined 34% to $7.6 billion, primarily due to tough comparisons with the prior year when new M2 chips drove strong sales. However, the recently launched M3 MacBook Pro models are showing promising early adoption.

Looking ahead, Apple provided optimistic guidance for the holiday quarter, expecting revenue growth to accelerate driven by new product launches and seasonal demand.

The stock rose 3% in after-hours trading following the earnings release.",
    },
    CatalogEntry {
        id: "2",
        title: "Federal Reserve Signals Potential Rate Cuts",
        source: "Reuters",
        category: "Policy",
        author: "Michael Chen",
        impact: Sentiment::Neutral,
        hours_ago: 4,
        content: "Federal Reserve officials signaled potential interest rate adjustments in response to evolving economic indicators, marking a significant shift in monetary policy stance.

During the latest Federal Open Market Committee meeting, policymakers expressed increased confidence that inflation is moving sustainably toward the 2% target, opening the door for potential rate cuts in the coming months.

Fed Chair Jerome Powell emphasized the dual mandate approach, noting that while inflation has shown significant progress, employment conditions remain a key consideration for future policy decisions.

\"We are prepared to adjust our policy stance as appropriate to support maximum employment and price stability,\" Powell stated during the post-meeting press conference.

Market participants have interpreted these comments as a clear signal that the central bank is preparing to pivot from its current restrictive monetary policy stance.

The federal funds rate currently stands at 5.25-5.5%, the highest level in over two decades. Economic data suggests that the aggressive tightening cycle may have achieved its intended effect of cooling inflation without triggering a severe recession.

Bond markets rallied on the news, with the 10-year Treasury yield falling to 4.2% from 4.4% earlier in the session. Equity markets also responded positively, with major indices posting gains across the board.

Economists now forecast a 70% probability of at least one rate cut by the end of the current quarter, with some predicting as many as three cuts over the next year.",
    },
];

pub struct ArticleUseCase;

impl ArticleUseCase {
    /// Article with the given id, timestamped relative to `now`. Unknown ids give `None`.
    pub fn find(&self, id: &str, now: DateTime<Utc>) -> Option<ArticleDetail> {
        let id = id.trim();
        CATALOG.iter().find(|e| e.id == id).map(|e| ArticleDetail {
            id: e.id.to_string(),
            title: e.title.to_string(),
            content: e.content.to_string(),
            source: e.source.to_string(),
            category: e.category.to_string(),
            author: e.author.to_string(),
            impact: e.impact,
            published_at: now - Duration::hours(e.hours_ago),
        })
    }

    pub fn ids(&self) -> Vec<&'static str> {
        CATALOG.iter().map(|e| e.id).collect()
    }
}
