use crate::models::reference;
use crate::ui::messages::header;

pub fn handle() {
    header("Localidades");
    for l in reference::LOCALITIES {
        println!("  {l}");
    }

    header("Modalidades");
    let codes: Vec<&str> = reference::modalities().iter().map(|m| m.code()).collect();
    println!("  {}", codes.join(", "));

    header("Ciclos");
    let cycles: Vec<String> = reference::cycles().iter().map(|c| c.label()).collect();
    println!("  {}", cycles.join(", "));

    header("Semanas");
    let weeks = reference::weeks();
    if let (Some(first), Some(last)) = (weeks.first(), weeks.last()) {
        println!("  {first}-{last}");
    }
}
