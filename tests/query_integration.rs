use web_toolbelt_rs::ToolbeltError;
use web_toolbelt_rs::query::QueryStringBuilder;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn add_string_param_to_absolute_url() -> Result<(), ToolbeltError> {
    init_logger();
    let builder = QueryStringBuilder::new("http://domain.com")?.add("p1", "v1");
    assert_eq!(builder.to_string(), "http://domain.com/?p1=v1");
    Ok(())
}

#[test]
fn add_secondary_string_param_to_absolute_url() -> Result<(), ToolbeltError> {
    let builder = QueryStringBuilder::new("http://domain.com/?p1=v1")?.add("p2", "v2");
    assert_eq!(builder.to_string(), "http://domain.com/?p1=v1&p2=v2");
    Ok(())
}

#[test]
fn add_string_param_to_absolute_url_with_path() -> Result<(), ToolbeltError> {
    let builder = QueryStringBuilder::new("http://domain.com/some/path")?.add("p1", "v1");
    assert_eq!(builder.to_string(), "http://domain.com/some/path?p1=v1");
    Ok(())
}

#[test]
fn add_object_param_to_absolute_url() -> Result<(), ToolbeltError> {
    let builder = QueryStringBuilder::new("http://domain.com/?p1=v1")?.add_value("p2", 10);
    assert_eq!(builder.to_string(), "http://domain.com/?p1=v1&p2=10");
    Ok(())
}

#[test]
fn add_handles_empty_string() -> Result<(), ToolbeltError> {
    let builder = QueryStringBuilder::new("http://domain.com/?p1=v1")?.add("p2", "");
    assert_eq!(builder.to_string(), "http://domain.com/?p1=v1");
    Ok(())
}

#[test]
fn add_handles_missing_value() -> Result<(), ToolbeltError> {
    let builder = QueryStringBuilder::new("http://domain.com/?p1=v1")?.add_opt::<i32>("p2", None);
    assert_eq!(builder.to_string(), "http://domain.com/?p1=v1");
    Ok(())
}

#[test]
fn remove_parameter() -> Result<(), ToolbeltError> {
    let builder = QueryStringBuilder::new("http://domain.com/?p1=v1")?.remove("p1");
    assert_eq!(builder.to_string(), "http://domain.com/");
    Ok(())
}

#[test]
fn remove_handles_non_existing_param() -> Result<(), ToolbeltError> {
    let builder = QueryStringBuilder::new("http://domain.com/?p1=v1")?.remove("p2");
    assert_eq!(builder.to_string(), "http://domain.com/?p1=v1");
    Ok(())
}

#[test]
fn remove_handles_empty_name() -> Result<(), ToolbeltError> {
    let builder = QueryStringBuilder::new("http://domain.com/?p1=v1")?.remove("");
    assert_eq!(builder.to_string(), "http://domain.com/?p1=v1");
    Ok(())
}

#[test]
fn toggle_param_should_remove() -> Result<(), ToolbeltError> {
    let builder = QueryStringBuilder::new("http://domain.com/?p1=v1")?.toggle("p1", "v2");
    assert_eq!(builder.to_string(), "http://domain.com/");
    Ok(())
}

#[test]
fn toggle_param_should_add() -> Result<(), ToolbeltError> {
    let builder = QueryStringBuilder::new("http://domain.com/")?.toggle("p1", "v2");
    assert_eq!(builder.to_string(), "http://domain.com/?p1=v2");
    Ok(())
}

#[test]
fn toggle_param_handles_missing_value() -> Result<(), ToolbeltError> {
    let builder = QueryStringBuilder::new("http://domain.com/")?.toggle_opt::<&str>("p1", None);
    assert_eq!(builder.to_string(), "http://domain.com/");
    Ok(())
}

#[test]
fn toggle_object_param_should_add() -> Result<(), ToolbeltError> {
    let builder = QueryStringBuilder::new("http://domain.com/")?.toggle_value("page", 3);
    assert_eq!(builder.to_string(), "http://domain.com/?page=3");
    Ok(())
}

#[test]
fn add_param_to_relative_url() -> Result<(), ToolbeltError> {
    let builder = QueryStringBuilder::new("/?p1=v1")?.add("p2", "v2");
    assert_eq!(builder.to_string(), "/?p1=v1&p2=v2");
    Ok(())
}

#[test]
fn add_multiple_params_to_relative_url() -> Result<(), ToolbeltError> {
    let builder = QueryStringBuilder::new("/")?
        .add("p1", "v1")
        .add("p2", "v2")
        .add("p3", "v3");
    assert_eq!(builder.to_string(), "/?p1=v1&p2=v2&p3=v3");
    Ok(())
}

#[test]
fn remove_param_from_relative_url() -> Result<(), ToolbeltError> {
    let builder = QueryStringBuilder::new("/?p1=v1")?.remove("p1");
    assert_eq!(builder.to_string(), "/");
    Ok(())
}

#[test]
fn relative_url_with_path_keeps_its_path() -> Result<(), ToolbeltError> {
    let builder = QueryStringBuilder::new("/some/path?p1=v1")?.add("p2", "v2");
    assert_eq!(builder.to_string(), "/some/path?p1=v1&p2=v2");
    Ok(())
}

#[test]
fn relative_url_never_gains_an_authority() -> Result<(), ToolbeltError> {
    let rendered = QueryStringBuilder::new("/")?
        .add("p1", "v1")
        .add("p2", "v2")
        .to_string();
    assert_eq!(rendered, "/?p1=v1&p2=v2");
    assert!(!rendered.contains("://"), "placeholder authority leaked: {rendered}");
    Ok(())
}

#[test]
fn overwriting_a_key_is_silent_and_keeps_order() -> Result<(), ToolbeltError> {
    let builder = QueryStringBuilder::new("http://domain.com/?a=1&b=2")?
        .add("a", "9")
        .add("c", "3");
    assert_eq!(builder.to_string(), "http://domain.com/?a=9&b=2&c=3");
    Ok(())
}

#[test]
fn invalid_url_is_rejected_on_construction() {
    let result = QueryStringBuilder::new("http://exa mple.com/");
    match result {
        Err(ToolbeltError::InvalidUrl { url, .. }) => {
            assert_eq!(url, "http://exa mple.com/");
        }
        Ok(_) => panic!("expected an InvalidUrl error"),
    }
}
