use std::env;

use tracing_subscriber::EnvFilter;

use matchfeed::{
    merge_batches, select_matches, ApiConfig, FilterCriteria, FootballClient, LeagueRef,
};

#[tokio::main]
async fn main() -> matchfeed::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .init();

    // usage: live_board [search] [league|all] [team|all] [status|all] [limit]
    let args: Vec<String> = env::args().skip(1).collect();
    let arg = |i: usize| args.get(i).map(String::as_str).unwrap_or_default();
    let criteria = FilterCriteria::from_params(arg(0), arg(1), arg(2), arg(3), arg(4));

    let client = FootballClient::new(ApiConfig::from_env()?);
    let leagues = client.get_leagues().await?;
    if let Some(league) = criteria
        .league_id
        .and_then(|id| leagues.iter().find(|l| l.id == id))
    {
        let league = LeagueRef::from(league);
        println!("League: {} ({})", league.name, league.id);
    }

    let today = chrono::Local::now().date_naive();
    let live = client.get_live_matches(criteria.league_id).await?;
    let dated = client
        .get_matches_by_date(today, criteria.league_id, criteria.team_id, None)
        .await?;
    let matches = merge_batches([live, dated]);

    let selection = select_matches(&matches, &criteria);
    println!("{} shown, {} live", selection.shown.len(), selection.live_count);
    for m in &selection.shown {
        let score = match (m.score.goals.home, m.score.goals.away) {
            (Some(home), Some(away)) => format!("{home}-{away}"),
            _ => "vs".to_string(),
        };
        println!(
            "[{:>9}] {} {} {} ({}, {})",
            m.status.to_string(),
            m.home_team.name,
            score,
            m.away_team.name,
            m.league.name,
            m.kickoff.format("%d %b %H:%M")
        );
    }
    Ok(())
}
