use chrono::{Local, NaiveDate};

/// append `.ext` to `name` unless it already ends with it
pub fn with_extension(name: &str, ext: &str) -> String {
    let suffix = format!(".{ext}");
    if name.ends_with(&suffix) {
        name.to_string()
    } else {
        name.to_string() + &suffix
    }
}

/// everything before the last `.`, empty when there is no extension at all
pub fn strip_extension(fname: &str) -> &str {
    fname.rsplit_once('.').map(|(stem, _)| stem).unwrap_or("")
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

pub fn today() -> String {
    format_date(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_added_once() {
        assert_eq!(with_extension("home", "html"), "home.html");
        assert_eq!(with_extension("home.html", "html"), "home.html");
        assert_eq!(with_extension("main.min", "js"), "main.min.js");
        assert_eq!(with_extension("style.css", "css"), "style.css");
    }

    #[test]
    fn extension_is_matched_with_the_dot() {
        // `xhtml` is not an `.html` suffix
        assert_eq!(with_extension("xhtml", "html"), "xhtml.html");
    }

    #[test]
    fn strip_only_the_last_extension() {
        assert_eq!(strip_extension("home.html"), "home");
        assert_eq!(strip_extension("my.page.html"), "my.page");
        assert_eq!(strip_extension("noext"), "");
    }

    #[test]
    fn date_is_abbreviated_month_padded_day_year() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "Jan 05, 2024");
        let date = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        assert_eq!(format_date(date), "Dec 31, 1999");
    }
}
