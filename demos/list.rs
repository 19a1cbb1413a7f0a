use action_history::{History, List, ListAction, OutOfRange};

fn main() -> Result<(), OutOfRange> {
    let mut list = List::new();
    let mut history = History::new();
    println!("{list}");

    for value in [1, 2, 3] {
        let pair = ListAction::push_pair(&list, value);
        history.insert_and_apply(&mut list, pair)?;
    }
    println!("{list}");

    let pair = ListAction::set_pair(&list, 1, 10)?;
    history.insert_and_apply(&mut list, pair)?;
    println!("{list}");

    for _ in 0..3 {
        history.undo(&mut list).transpose()?;
        println!("{list}");
    }

    // Recording here drops everything that could have been redone.
    let pair = ListAction::set_pair(&list, 0, -5)?;
    history.insert_and_apply(&mut list, pair)?;
    println!("{list}");

    while history.can_redo() {
        history.redo(&mut list).transpose()?;
    }
    println!("{list}");

    history.undo(&mut list).transpose()?;
    println!("{list}");
    history.undo(&mut list).transpose()?;
    println!("{list}");

    println!("{}", history.display());
    Ok(())
}
