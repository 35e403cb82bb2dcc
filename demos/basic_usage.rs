use http_errors::{
    BadRequestError, NotFoundError, Result, ResolveError, StatusError, create_http_error, http_error,
};

fn find_book(isbn: &str) -> Result<&'static str> {
    if isbn.len() != 13 {
        return Err(BadRequestError::new("ISBN must have 13 digits"));
    }
    if isbn == "9780000000002" {
        return Ok("The Rust Programming Language");
    }
    Err(http_error!(NotFoundError, "no book with ISBN {}", isbn))
}

fn main() {
    println!("--- Basic Usage Example ---\n");

    // 1. Typed markers: one zero-sized type per status code
    println!("1. Errors from typed markers:");
    for isbn in ["123", "9780000000002", "9789999999999"] {
        match find_book(isbn) {
            Ok(title) => println!("   {} -> {}", isbn, title),
            Err(err) => println!("   {} -> \"{}\" (retryable: {})", isbn, err, err.is_retryable()),
        }
    }

    // 2. Runtime lookup by code, numeric string, reason phrase or type name
    println!("\n2. Error types resolved at runtime:");
    for reference in ["503", "I'm a Teapot", "TooManyRequestsError"] {
        match create_http_error(reference, None) {
            Ok(variant) => println!(
                "   {:<22} -> {} ({})",
                format!("{:?}", reference),
                variant.type_name(),
                variant.name()
            ),
            Err(err) => println!("   {:?} -> {}", reference, err),
        }
    }

    // 3. Invalid references are reported, never guessed
    println!("\n3. Rejected references:");
    let rejected: [(&str, std::result::Result<_, ResolveError>); 3] = [
        ("200", create_http_error(200, None)),
        ("999", create_http_error(999, None)),
        ("Not a Valid Error", create_http_error("Not a Valid Error", None)),
    ];
    for (input, result) in rejected {
        if let Err(err) = result {
            println!("   {:<18} -> {}", input, err);
            println!("   {:<18}    public: {}", "", err.to_public());
        }
    }

    // 4. Checking the type of a caught error
    println!("\n4. Matching instances:");
    let err = NotFoundError::new("/shelf/42");
    let not_found = create_http_error(404, None).expect("404 is a standard error code");
    println!("   is_a::<NotFoundError>(): {}", err.is_a::<NotFoundError>());
    println!("   matches runtime variant: {}", not_found.matches(&err));
    println!("   NotFoundError::CODE:     {}", NotFoundError::CODE);
}
