use crate::cli::chat::print_starters;

pub fn list_starters() {
    print_starters();
    println!("\nSend one from the chat with /starter <number>.");
}
