use color_eyre::eyre::Result;
use dotenv::dotenv;
use findpro_core::{
    booking::SlotScheduleEngine,
    config::BookingConfig,
    errors::BookingError,
    models::{
        booking::{Slot, SlotStatus},
        professional::Professional,
    },
};
use tracing::{debug, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = BookingConfig::from_env()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let path = config
        .fixture
        .clone()
        .ok_or_else(|| {
            BookingError::Config("BOOKING_FIXTURE environment variable must be set".to_string())
        })?;
    let professional = Professional::from_json_file(&path)?;
    let windows = professional.availability_windows()?;

    info!(
        professional = %professional.full_name(),
        windows = windows.len(),
        "Loaded professional from {}",
        path.display()
    );
    match professional.currency() {
        Ok(currency) => info!("Price: {}{}", currency.symbol(), professional.price_number),
        Err(e) => warn!("Price shown without symbol: {}", e),
    }

    let mut engine = SlotScheduleEngine::new(&config.clock());

    // Follow state changes the way a screen would
    let mut updates = engine.subscribe();
    let screen_windows = windows.clone();
    let screen = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().ui_state(&screen_windows);
            let selected = state.iter_slots().filter(|slot| slot.is_selected()).count();
            debug!(date = %state.current_date_label, selected, "Booking screen refreshed");
        }
    });

    engine.shift_days(config.day_offset);
    for slot_id in &config.selected_slots {
        engine.on_time_clicked(*slot_id);
    }

    let state = engine.ui_state(&windows);
    let selected = engine.selected_slots(&windows);

    // Closing the session ends the screen task
    drop(engine);
    screen.await?;

    println!("{}", state.current_date_label);
    for [left, right] in &state.slots {
        println!("{}    {}", render_slot(left), render_slot(right));
    }

    info!(
        selected = selected.len(),
        "Selected: {}",
        selected
            .iter()
            .map(|slot| format!("{}-{}", slot.start_label, slot.end_label))
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(())
}

fn render_slot(slot: &Slot) -> String {
    let marker = match slot.status {
        SlotStatus::Available => "open",
        SlotStatus::Unavailable => "----",
        SlotStatus::Selected => "[**]",
    };

    format!("{}-{} {}", slot.start_label, slot.end_label, marker)
}
