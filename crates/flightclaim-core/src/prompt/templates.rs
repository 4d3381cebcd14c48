//! Prompt templates
//!
//! Placeholders are `{name}` and are substituted in a single pass, so text
//! coming from the provider or the web can never inject another placeholder.

/// Prompt template for the compensation eligibility verdict
pub const ELIGIBILITY_PROMPT: &str = r#"You are an assistant that checks if a passenger is eligible for any benefits based on airline policies.

Carefully read the compensation policy and check what the airline commits to and what it does not.
Based only on the flight details and policy, determine if the passenger is eligible for anything, such as compensation, rebooking, refund, voucher, meals, hotel, or nothing at all.

Requirements:
1. Be clear and factual. Do not write a customer support message. No apologies or filler.
2. Do not repeat yourself.
3. Answer in 2 to 4 sentences.
4. Always include the airline name.
5. Format dates and times like "April 12, 2025 at 6:05 PM local time".
6. Calculate the delay from the scheduled and actual departure times provided.
7. State the eligibility verdict explicitly, and only for this passenger's scenario.

Examples of tone:
- Delta Air Lines offers compensation in this case because...
- American Airlines does not offer compensation, but free rebooking is available because...
- Delta Air Lines provides no benefits here because...

Flight Details:
- Airline: {airline}
- From: {origin}
- To: {destination}
- Scheduled Departure: {scheduled_departure}
- Actual Departure: {actual_departure}
- Status: {status}

Compensation Policy:
{policy}

Give the final answer and the reasoning in simple, readable language."#;

/// Prompt template for explaining why a flight was cancelled or delayed
pub const CANCELLATION_REASON_PROMPT: &str = r#"You are an aviation assistant. Using the flight details and the web search results below, explain the most likely reason this flight was cancelled or delayed.

Requirements:
1. Write a factual summary of 3 to 4 sentences.
2. Only use information supported by the search results; if they do not explain the disruption, say that the reason could not be determined.
3. Do not speculate about compensation.

Flight Details:
- Airline: {airline}
- From: {origin}
- To: {destination}
- Scheduled Departure: {scheduled_departure}
- Actual Departure: {actual_departure}
- Status: {status}

Web Search Results:
{snippets}"#;
