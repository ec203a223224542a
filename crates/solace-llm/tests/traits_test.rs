use solace_llm::{GenerationOptions, GenerationRequest};

#[test]
fn test_generation_request_creation() {
    let request = GenerationRequest::new("User: hello\nAssistant:");

    assert_eq!(request.prompt, "User: hello\nAssistant:");
    assert_eq!(request.options, GenerationOptions::default());
}

#[test]
fn test_generation_request_with_options() {
    let options = GenerationOptions::new()
        .max_length(200)
        .temperature(0.8)
        .do_sample(true);

    let request = GenerationRequest::new("hi").with_options(options);

    assert_eq!(request.options.max_length, Some(200));
    assert_eq!(request.options.temperature, Some(0.8));
    assert_eq!(request.options.do_sample, Some(true));
}

#[test]
fn test_generation_options_default() {
    let options = GenerationOptions::default();

    assert_eq!(options.max_length, None);
    assert_eq!(options.temperature, None);
    assert_eq!(options.do_sample, None);
}
