//! Removal-notice message rendering.

use wishhub_core::traits::RemovalNotice;

/// Render the notice subject in the guest's language.
pub fn subject(notice: &RemovalNotice) -> String {
    if notice.language == "it" {
        format!("Oggetto rimosso dalla lista: {}", notice.list_name)
    } else {
        format!("Item removed from list: {}", notice.list_name)
    }
}

/// Render the notice body in the guest's language.
pub fn body(notice: &RemovalNotice) -> String {
    if notice.language == "it" {
        format!(
            "Ciao,\n\nti informiamo che l'oggetto \"{}\" che avevi prenotato nella lista \
             \"{}\" è stato rimosso dal festeggiato.\n\nSaluti,\nIl team di Wishhub",
            notice.item_name, notice.list_name
        )
    } else {
        format!(
            "Hello,\n\nwe are informing you that the item \"{}\" you claimed in the list \
             \"{}\" has been removed by the celebrant.\n\nBest regards,\nThe Wishhub team",
            notice.item_name, notice.list_name
        )
    }
}
