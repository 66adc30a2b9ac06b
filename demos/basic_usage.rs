use curl_strerror::{
    CurlCode, Domain, MultiCode, UrlCode, lookup, resolve, strerror, system_message,
};

fn fetch(url: &str) -> Result<(), CurlCode> {
    // Simulate a transfer that gives up waiting for the server
    if url.starts_with("http://slow.") {
        return Err(CurlCode::OperationTimedout);
    }
    Ok(())
}

fn main() {
    println!("--- Basic Usage Example ---\n");

    // 1. Typed codes describe themselves
    match fetch("http://slow.example") {
        Ok(()) => println!("Success!"),
        Err(code) => {
            println!("1. [TYPED] {} -> \"{}\"", code.code(), code);
        }
    }

    // 2. The same number means different things in different domains
    println!("\n2. [DOMAINS] code 3 in each domain:");
    for domain in [Domain::Easy, Domain::Multi, Domain::Share, Domain::Url] {
        println!("   {:<6} {}", domain, lookup(domain, 3).unwrap_or("-"));
    }
    println!("   multi  -1 \"{}\"", MultiCode::CallMultiPerform);
    println!("   url    {} (sentinel) \"{}\"", UrlCode::LAST, lookup(Domain::Url, UrlCode::LAST).unwrap_or("-"));

    // 3. Raw system error numbers go through a caller buffer
    println!("\n3. [SYSTEM] raw error numbers:");
    let mut buf = [0u8; 256];
    match strerror(2, &mut buf) {
        Some(text) => println!("   2 -> \"{}\"", text),
        None => println!("   2 -> (no room)"),
    }
    println!("   0 bytes -> {:?}", strerror(2, &mut []));

    let mut tiny = [0u8; 8];
    println!("   8 bytes -> {:?}", strerror(2, &mut tiny));
    println!("   owned   -> \"{}\"", system_message(13));

    // 4. Structured record for the caller's logger
    println!("\n4. [RECORD] what a log line looks like:");
    let mut line = String::new();
    if resolve(Domain::Easy, 20).write_to(&mut line).is_ok() {
        println!("   {}", line);
    }

    #[cfg(feature = "security_table")]
    {
        use curl_strerror::security::{security_strerror, status};

        println!("\n5. [SECURITY] provider status codes:");
        let mut buf = [0u8; 256];
        for code in [status::SEC_E_OK, status::SEC_E_CERT_EXPIRED, status::SEC_E_ILLEGAL_MESSAGE] {
            if let Some(text) = security_strerror(code, &mut buf) {
                println!("   {}", text);
            }
        }
    }
}
