use colour::red;

pub fn print_intro() {
    println!(
        r#"
   ____  ___  __  ___________ _   ____(_)__ _    __
  / __ \/ _ \/ / / / ___/ __ \ | / / / / _ \ | /| / /
 / / / /  __/ /_/ / /  / /_/ / |/ / / /  __/ |/ |/ /
/_/ /_/\___/\__,_/_/   \____/|___/_/_/\___/|__/|__/ "#
    );

    if cfg!(debug_assertions) {
        red!("\nWARNING: YOU ARE RUNNING IN DEBUG MODE. Keep in mind that everything is way slower than it should be.\n\n");
    }
}
