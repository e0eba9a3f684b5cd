use crate::services::markup::escape_html;

pub const SUBJECT: &str = "Polaris Consulting Info Session Link";
pub const SESSION_NAME: &str = "Polaris Consulting Info Session";
pub const SESSION_TIME: &str = "9:00 AM EST";
pub const MEETING_LINK: &str =
    "https://us05web.zoom.us/j/8315104346?pwd=VV4D2u3cLJFdbIa4F8fU12uTfkHWHH.1";
pub const SUPPORT_EMAIL: &str = "consultants.polaris@gmail.com";
pub const WEBSITE: &str = "www.polarisconsult.org";
pub const WEBSITE_URL: &str = "https://www.polarisconsult.org";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub text: String,
    pub html: String,
}

pub fn render(name: &str, date: &str) -> Confirmation {
    let text = format!(
        "Hi {name}!\n\
         \n\
         Thank you for registering for the {SESSION_NAME} happening on {date} at {SESSION_TIME}.\n\
         \n\
         Here is the Zoom link for the session:\n\
         {MEETING_LINK}\n\
         \n\
         If you have any questions, please contact {SUPPORT_EMAIL} or visit {WEBSITE}.\n"
    );

    let name = escape_html(name);
    let date = escape_html(date);
    let link = escape_html(MEETING_LINK);
    let html = format!(
        r#"<p>Hi {name}!</p>
<p>Thank you for registering for the <strong>{SESSION_NAME}</strong> happening on <strong>{date} at {SESSION_TIME}</strong>.</p>
<p>Here is the Zoom link for the session:<br><a href="{link}">{link}</a></p>
<p>If you have any questions, please contact <a href="mailto:{SUPPORT_EMAIL}">{SUPPORT_EMAIL}</a> or visit <a href="{WEBSITE_URL}">{WEBSITE}</a>.</p>"#
    );

    Confirmation { text, html }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn text_body_mentions_session_details() {
        let mail = render("Jane Doe", "June 25, 2025");

        assert!(mail.text.starts_with("Hi Jane Doe!\n\n"));
        assert!(mail.text.contains(
            "Polaris Consulting Info Session happening on June 25, 2025 at 9:00 AM EST."
        ));
        assert!(mail.text.contains(MEETING_LINK));
        assert!(mail
            .text
            .contains("consultants.polaris@gmail.com or visit www.polarisconsult.org."));
    }

    #[test]
    fn html_body_has_one_well_formed_meeting_link() {
        let mail = render("Jane Doe", "June 25, 2025");

        assert!(mail.html.contains("<p>Hi Jane Doe!</p>"));
        assert!(mail.html.contains("<strong>June 25, 2025 at 9:00 AM EST</strong>"));
        assert_eq!(count(&mail.html, "zoom.us"), 2);
        assert!(mail
            .html
            .contains(&format!(r#"<a href="{MEETING_LINK}">{MEETING_LINK}</a>"#)));
        assert_eq!(count(&mail.html, "<a "), count(&mail.html, "</a>"));
    }

    #[test]
    fn markup_in_name_and_date_cannot_break_html() {
        let mail = render("<script>alert('x')</script> & Co", "</p><p>June 25");

        assert!(!mail.html.contains("<script>"));
        assert!(mail
            .html
            .contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; Co"));
        assert!(mail.html.contains("&lt;/p&gt;&lt;p&gt;June 25"));
        assert_eq!(count(&mail.html, "<p>"), 4);
        assert_eq!(count(&mail.html, "</p>"), 4);
        assert_eq!(count(&mail.html, "<strong>"), count(&mail.html, "</strong>"));

        // plain text keeps the literal values
        assert!(mail.text.contains("<script>alert('x')</script> & Co"));
        assert!(mail.text.contains("</p><p>June 25"));
    }
}
