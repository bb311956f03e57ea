use axum_test::TestResponse;

#[track_caller]
pub(crate) fn assert_json_content_type(response: &TestResponse) {
    let content_type_header = response.header("content-type");
    assert_eq!(content_type_header, "application/json");
}
