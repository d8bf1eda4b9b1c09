//! Human-readable connection report.

use std::io::Write;

use twit_client::api::{ShowDetail, ShowList, StreamList};
use twit_client::{ApiResponse, TwitApiClient};

const SHOW_PREVIEW: usize = 3;
const STREAM_PREVIEW: usize = 2;
const DESCRIPTION_PREVIEW: usize = 100;

/// Run the connection test and write the report to `out`.
///
/// Fails when the show listing comes back as an error result; the
/// follow-up show and stream lookups only report what they find.
pub async fn run_connection_test(
    client: &TwitApiClient,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    writeln!(out, "Testing connection to TWiT API...")?;
    writeln!(out, "Endpoint: {}/shows", client.base_url())?;

    let shows = match client.list_shows(&[]).await {
        ApiResponse::Error(err) => {
            writeln!(out, "Error: {}", err.error)?;
            return Err(err.into());
        }
        data => data.decode::<ShowList>()?,
    };

    writeln!(out, "Connection successful!")?;
    write_show_list(out, &shows)?;

    if let Some(first) = shows.shows.first() {
        writeln!(out)?;
        writeln!(out, "Getting details for show ID: {}", first.id)?;
        match client.get_show(&first.id, &[]).await.decode::<ShowDetail>() {
            Ok(detail) => write_show_detail(out, &detail)?,
            Err(e) => {
                tracing::warn!(show_id = %first.id, error = %e, "Failed to fetch show details");
                writeln!(out, "Could not load show details: {e}")?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "Getting live streams information...")?;
    match client.list_streams(&[]).await.decode::<StreamList>() {
        Ok(streams) => write_stream_list(out, &streams)?,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to fetch streams");
            writeln!(out, "Could not load streams: {e}")?;
        }
    }

    Ok(())
}

fn write_show_list(out: &mut impl Write, list: &ShowList) -> std::io::Result<()> {
    writeln!(out, "Found {} shows", list.count)?;
    if list.shows.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "First few shows:")?;
    for show in list.shows.iter().take(SHOW_PREVIEW) {
        writeln!(out, "- {} ({})", show.label, show.id)?;
    }
    Ok(())
}

fn write_show_detail(out: &mut impl Write, detail: &ShowDetail) -> std::io::Result<()> {
    writeln!(out, "Show title: {}", detail.shows.label)?;
    if let Some(description) = &detail.shows.description {
        let preview: String = description.chars().take(DESCRIPTION_PREVIEW).collect();
        writeln!(out, "Description: {preview}...")?;
    }
    Ok(())
}

fn write_stream_list(out: &mut impl Write, list: &StreamList) -> std::io::Result<()> {
    writeln!(out, "Found {} streams", list.count)?;
    for stream in list.streams.iter().take(STREAM_PREVIEW) {
        writeln!(out, "- {} ({})", stream.label, stream.stream_type)?;
    }
    Ok(())
}
