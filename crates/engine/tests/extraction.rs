// ABOUTME: End-to-end extraction tests over realistic statistics-page documents.
// ABOUTME: Covers default-safety, merge ordering, non-erasure, list bounds, and parse robustness.

use blogstats_engine::{handle_request, Engine, Request};
use pretty_assertions::assert_eq;

fn extract(html: &str) -> blogstats_engine::StatsRecord {
    Engine::default().extract_html(html)
}

#[test]
fn default_safety_on_empty_document() {
    let record = extract("<html><head><title>blog</title></head><body><p>글</p></body></html>");
    assert_eq!(record.today, 0);
    assert_eq!(record.yesterday, 0);
    assert_eq!(record.week, 0);
    assert_eq!(record.month, 0);
    assert_eq!(record.total, 0);
    assert!(record.weekly_series.is_empty());
    assert!(record.top_posts.is_empty());

    let response = handle_request(&Engine::default(), "<body></body>", &Request::GetStats);
    assert!(response.success, "absence of signal is not a fault");
}

#[test]
fn widget_overwrites_admin_today() {
    let html = r#"
        <div class="visitor-stat">오늘 5</div>
        <div><span>오늘</span><em class="cnt">9</em></div>
    "#;
    assert_eq!(extract(html).today, 9);
}

#[test]
fn strategy_without_contribution_erases_nothing() {
    // Admin finds total=100; the document has no tables, so the legacy
    // strategy reports no contribution at all.
    let html = r#"<span class="stat">전체 100</span>"#;
    let record = extract(html);
    assert_eq!(record.total, 100);
}

#[test]
fn top_posts_bounded_at_ten_in_document_order() {
    let items: String = (1..=25)
        .map(|i| format!(r#"<div class="post-row"><a>제목 {}</a></div>"#, i))
        .collect();
    let record = extract(&items);
    assert_eq!(record.top_posts.len(), 10);
    let titles: Vec<&str> = record.top_posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles[0], "제목 1");
    assert_eq!(titles[9], "제목 10");
}

#[test]
fn overlong_titles_are_truncated_not_rejected() {
    let long_title = "열".repeat(80);
    let html = format!(r#"<div class="article"><a>{}</a></div>"#, long_title);
    let record = extract(&html);
    assert_eq!(record.top_posts.len(), 1);
    assert!(record.top_posts[0].title.chars().count() <= 50);
}

#[test]
fn numeric_robustness_in_table_cells() {
    let html = r#"
        <table>
            <tr><td>오늘</td><td>1,234명</td></tr>
            <tr><td>주간</td><td>없음</td></tr>
        </table>
    "#;
    let record = extract(html);
    assert_eq!(record.today, 1234);
    assert_eq!(record.week, 0);
}

#[test]
fn single_table_scenario() {
    let html = r#"<table><tr><td>오늘</td><td>3,410</td></tr></table>"#;
    let record = extract(html);
    assert_eq!(record.today, 3410);
    assert_eq!(record.yesterday, 0);
    assert_eq!(record.week, 0);
    assert_eq!(record.month, 0);
    assert_eq!(record.total, 0);
    assert!(record.weekly_series.is_empty());
    assert!(record.top_posts.is_empty());

    let response = handle_request(&Engine::default(), html, &Request::GetStats);
    assert!(response.success);
}

#[test]
fn full_admin_page_extraction() {
    let bars: String = [120, 140, 95, 180, 210, 160, 130]
        .iter()
        .map(|v| format!(r#"<div class="bar" data-value="{}"></div>"#, v))
        .collect();
    let html = format!(
        r#"
        <div class="visitor-summary">
            <div class="stat-today">오늘 1,234</div>
            <div class="stat-yesterday">어제 980</div>
            <div class="stat-cumulative">누적 560,000</div>
        </div>
        <div class="chart-weekly">{bars}</div>
        <ul>
            <li class="post-row"><span class="title">봄 여행기</span><span class="view">1,500</span></li>
            <li class="post-row"><span class="title">맛집 정리</span><span class="view">조회 880회</span></li>
        </ul>
        "#
    );
    let record = extract(&html);
    assert_eq!(record.today, 1234);
    assert_eq!(record.yesterday, 980);
    assert_eq!(record.total, 560_000);
    assert_eq!(record.weekly_series, vec![120, 140, 95, 180, 210, 160, 130]);
    assert_eq!(record.top_posts.len(), 2);
    assert_eq!(record.top_posts[0].title, "봄 여행기");
    assert_eq!(record.top_posts[0].views, 1500);
    assert_eq!(record.top_posts[1].views, 880);
}

#[test]
fn strategies_compose_across_page_generations() {
    // A page carrying every generation of markup at once: the legacy table
    // fills week/month, the admin elements fill yesterday, and the widget
    // takes the today field last.
    let html = r#"
        <div class="stat">어제 900</div>
        <table>
            <tr><td>이번 주</td><td>6,300</td></tr>
            <tr><td>월간</td><td>27,000</td></tr>
        </table>
        <div>TODAY <span class="counter">1,050</span></div>
    "#;
    let record = extract(html);
    assert_eq!(record.today, 1050);
    assert_eq!(record.yesterday, 900);
    assert_eq!(record.week, 6300);
    assert_eq!(record.month, 27000);
}

#[test]
fn extraction_timestamp_is_stamped_per_run() {
    let before = chrono::Utc::now();
    let record = extract("<body></body>");
    let after = chrono::Utc::now();
    assert!(record.extracted_at >= before && record.extracted_at <= after);
}

#[test]
fn response_json_matches_wire_shape() {
    let response = handle_request(
        &Engine::default(),
        r#"<table><tr><td>오늘</td><td>42</td></tr></table>"#,
        &Request::GetStats,
    );
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["today"], 42);
    assert_eq!(json["data"]["weeklySeries"], serde_json::json!([]));
    assert_eq!(json["data"]["topPosts"], serde_json::json!([]));
    assert!(json["data"]["extractedAt"].is_string());
}
