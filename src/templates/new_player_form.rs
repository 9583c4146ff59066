pub static NEW_PLAYER_FORM: &'static str = r#"
<form id="{{form_id}}">
    <label for="name">Name</label>
    <input id="name" name="name" type="text" required>

    <label for="breed">Breed</label>
    <input id="breed" name="breed" type="text" required>

    <label for="status">Status</label>
    <select id="status" name="status">
        {{#each statuses}}<option value="{{this}}">{{this}}</option>{{/each}}
    </select>

    <label for="imageUrl">Image URL</label>
    <input id="imageUrl" name="imageUrl" type="url">

    <button type="submit">Add to Roster</button>
</form>
"#;
