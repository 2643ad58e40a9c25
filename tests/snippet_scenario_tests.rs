// tests/snippet_scenario_tests.rs - Lifecycle snippets through the global logger
use colorful_logger::snippets::{generating_snippet, initializing_snippet, registering_snippet};
use colorful_logger::{registry, Background, BufferSink, Foreground, LoggerError};
use log::Level;

#[test]
fn test_snippet_scenarios() {
    println!("=== Testing snippets before initialization ===");
    assert_eq!(
        registering_snippet("Block", "mymod:stone", false, Foreground::Green),
        Err(LoggerError::UninitializedAccess)
    );

    let sink = BufferSink::new();
    let logger = registry::initialize_with_sink("demo", true, Box::new(sink.clone())).unwrap();

    println!("=== Testing registering scenario ===");
    registering_snippet("Block", "mymod:stone", false, Foreground::Green).unwrap();
    assert_eq!(
        sink.entries(),
        vec![(
            Level::Info,
            "\u{1B}[32m\t\t>> Registering Block: mymod:stone\u{1B}[0m".to_string()
        )]
    );
    sink.clear();

    println!("=== Testing generating scenario ===");
    generating_snippet("Recipe", true, true, Foreground::Cyan, Background::Black).unwrap();
    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    let line = &lines[0];
    assert!(line.starts_with("\x1b[36m\x1b[40m"));
    assert!(line.ends_with("\x1b[0m"));
    let pool = line.find("(as Pool Child)").unwrap();
    let datagen = line.find("(Only called on task '[runDatagen]')").unwrap();
    assert!(pool < datagen);
    sink.clear();

    println!("=== Testing initializing scenario ===");
    initializing_snippet("Items", true, Foreground::BrightCyan, Background::Black).unwrap();
    assert_eq!(
        sink.lines(),
        vec!["\x1b[96m\x1b[40m >> Initializing: Items (Only called on task '[runDatagen]') \x1b[0m"
            .to_string()]
    );
    sink.clear();

    println!("=== Testing enabled toggle ===");
    logger.set_enabled(false);
    logger.emit("plain");
    logger.emit_colored("fg", Foreground::Red);
    logger.emit_styled("fg+bg", Foreground::Red, Background::White);
    registering_snippet("Item", "mymod:gem", true, Foreground::Yellow).unwrap();
    generating_snippet("Loot", false, false, Foreground::Blue, Background::Black).unwrap();
    assert!(sink.is_empty());

    logger.set_enabled(true);
    registering_snippet("Item", "mymod:gem", true, Foreground::Yellow).unwrap();
    assert_eq!(
        sink.lines(),
        vec!["\x1b[33m\t\t> Registering Item mymod:gem: (as Pool Child)\x1b[0m".to_string()]
    );
}
