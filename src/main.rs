use resaltador::app::App;
use resaltador::repl;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new();

    // Run the REPL loop
    // It owns all user interaction including file and clipboard loading
    repl::run(&mut app)?;

    Ok(())
}
