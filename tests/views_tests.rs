use chrono::NaiveDate;
use standup_summariser::views::{render_empty_notice, render_summary_post, summary_header};

fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 28).unwrap()
}

#[test]
fn test_summary_header_embeds_channel_and_iso_date() {
    let header = summary_header("C0123456789", fixed_date());
    assert_eq!(header, "*Stand-up summary for <#C0123456789> (2026-08-28):*");
}

#[test]
fn test_summary_header_zero_pads_date() {
    let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
    let header = summary_header("C1", date);
    assert!(header.contains("(2026-01-05)"));
}

#[test]
fn test_render_summary_post_places_summary_under_header() {
    let post = render_summary_post("C0123456789", fixed_date(), "- X\n- Y");
    assert_eq!(
        post,
        "*Stand-up summary for <#C0123456789> (2026-08-28):*\n- X\n- Y"
    );
}

#[test]
fn test_render_empty_notice_is_italic_fixed_line() {
    let post = render_empty_notice("C0123456789", fixed_date());
    assert_eq!(
        post,
        "*Stand-up summary for <#C0123456789> (2026-08-28):*\n\
         _There are no stand-up messages to summarise today._"
    );
}
