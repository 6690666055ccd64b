//! Prompt construction for itinerary generation
//!
//! Pure string assembly: the same `TripRequest` always yields the same
//! prompt, including the fixed example shape.

use std::fmt::Write;

use crate::types::TripRequest;

/// Build the generation prompt for a trip request
///
/// Embeds every request field verbatim and instructs the model to return
/// only valid JSON matching the trip plan shape, one chapter per day.
pub fn build_prompt(request: &TripRequest) -> String {
    let mut prompt = String::from(
        "You are a travel storyteller. Produce a JSON itinerary with narrative text. \
         Output only valid JSON with no prose, comments, or markdown fences.\n\
         \n\
         Top-level keys:\n\
         - title (string)\n\
         - summary (string)\n\
         - destination (string)\n\
         - travel_style (string)\n\
         - chapters (array, exactly one chapter per day). Each chapter:\n\
         - day (int, 1-based), title (string), time_window (string), \
         story_paragraph (string), story_image_prompt (string)\n\
         - activities (array). Each activity: type (string), description (string), \
         estimated_price_usd (number, omit when unknown), time_allocation (string), \
         places (array, may be empty)\n\
         - each place: name (string), address (string), geo {lat, lng}, url (string), \
         price_estimate (symbolic tier such as \"$$\"), description (string), \
         menu_items (array of strings, restaurants only)\n\
         \n\
         Example chapter:\n\
         {\"day\": 1, \"title\": \"Old Town at Dusk\", \"time_window\": \"afternoon to evening\", \
         \"story_paragraph\": \"...\", \"story_image_prompt\": \"...\", \"activities\": \
         [{\"type\": \"walk\", \"description\": \"...\", \"estimated_price_usd\": 0, \
         \"time_allocation\": \"2 hours\", \"places\": []}]}\n\
         \n\
         Trip constraints:\n",
    );

    let _ = writeln!(prompt, "origin: {}", request.origin);
    let _ = writeln!(prompt, "destination: {}", request.destination);
    let _ = writeln!(
        prompt,
        "start_date: {}",
        request.start_date.as_deref().unwrap_or("unspecified")
    );
    let _ = writeln!(prompt, "duration_days: {}", request.duration_days);
    let _ = writeln!(prompt, "budget_usd: {}", request.budget);
    let _ = writeln!(prompt, "travel_style: {}", request.travel_style);
    let _ = writeln!(prompt, "interests: {}", request.interests.join(", "));
    let _ = writeln!(prompt, "eat_out: {}", request.eat_out);

    let _ = write!(
        prompt,
        "\nProduce exactly {} chapters, one per day, with day values 1 through {} in order. \
         Keep every estimated_price_usd non-negative and the total roughly within budget. \
         Keep the JSON syntactically valid and machine-parseable.",
        request.duration_days, request.duration_days
    );

    prompt
}
