use crate::{Action, PageTarget};

/// Translate a wire action into a typed [`Action`].
///
/// Click actions encode their argument in the name (`rover:Curiosity`,
/// `page:next`, `page:3`); change actions (`camera`, `earth_date`) and
/// history pops (`route`) carry their value in the payload. Unknown or
/// malformed actions map to `None` and are dropped by the caller.
pub fn parse_action(name: &str, value: Option<&str>) -> Option<Action> {
    if let Some(rover) = name.strip_prefix("rover:") {
        if rover.is_empty() {
            return None;
        }
        return Some(Action::SelectRover(rover.to_string()));
    }

    if let Some(target) = name.strip_prefix("page:") {
        let target = match target {
            "start" => PageTarget::Start,
            "end" => PageTarget::End,
            "prev" => PageTarget::Prev,
            "next" => PageTarget::Next,
            n => PageTarget::Page(n.parse().ok().filter(|&n| n >= 1)?),
        };
        return Some(Action::Paginate(target));
    }

    match name {
        "home" => Some(Action::SelectHome),
        "camera" => Some(Action::SelectCamera(non_empty(value))),
        "earth_date" => Some(Action::SelectEarthDate(non_empty(value))),
        "route" => Some(Action::RouteTo(value.unwrap_or("/").to_string())),
        _ => None,
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clicks() {
        assert!(matches!(parse_action("home", None), Some(Action::SelectHome)));
        assert!(matches!(
            parse_action("rover:Curiosity", None),
            Some(Action::SelectRover(name)) if name == "Curiosity"
        ));
        assert!(matches!(
            parse_action("page:next", None),
            Some(Action::Paginate(PageTarget::Next))
        ));
        assert!(matches!(
            parse_action("page:7", None),
            Some(Action::Paginate(PageTarget::Page(7)))
        ));
    }

    #[test]
    fn test_parse_changes() {
        assert!(matches!(
            parse_action("camera", Some("FHAZ")),
            Some(Action::SelectCamera(Some(camera))) if camera == "FHAZ"
        ));
        // The empty "Select Camera" option clears the filter.
        assert!(matches!(
            parse_action("camera", Some("")),
            Some(Action::SelectCamera(None))
        ));
        assert!(matches!(
            parse_action("earth_date", Some("2015-05-30")),
            Some(Action::SelectEarthDate(Some(date))) if date == "2015-05-30"
        ));
    }

    #[test]
    fn test_parse_route() {
        assert!(matches!(
            parse_action("route", Some("/Spirit&page=2")),
            Some(Action::RouteTo(path)) if path == "/Spirit&page=2"
        ));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_action("page:zero", None).is_none());
        assert!(parse_action("page:0", None).is_none());
        assert!(parse_action("rover:", None).is_none());
        assert!(parse_action("launch", None).is_none());
    }
}
