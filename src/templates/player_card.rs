pub static PLAYER_CARD_PARTIAL: &'static str = r#"
<div class="player-card">
    <h2>{{name}}</h2>
    <p>Breed: {{breed}}</p>
    <p>Status: {{status}}</p>
    <img src="{{image_url}}" alt="{{name}}">

    <button class="details-button" data-player-id="{{id}}">See Details</button>
    <button class="remove-button" data-player-id="{{id}}">Remove from Roster</button>
</div>
"#;
