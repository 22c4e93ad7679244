use crate::config::Theme;

pub fn render_index(theme: &Theme) -> String {
    INDEX_HTML
        .replace("{{THEME_COLOR}}", theme.color)
        .replace("{{THEME_NAME}}", theme.name)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Flow</title>
  <style>
    :root {
      --bg: #121212;
      --panel: #1a1a1a;
      --raised: #2a2a2a;
      --border: #2a2a2a;
      --ink: #ffffff;
      --muted: #9ca3af;
      --accent: {{THEME_COLOR}};
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", Arial, sans-serif;
    }

    header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      padding: 16px 24px;
      background: rgba(26, 26, 26, 0.8);
      border-bottom: 1px solid var(--border);
      backdrop-filter: blur(12px);
      position: sticky;
      top: 0;
      z-index: 20;
    }

    header h1 {
      margin: 0;
      font-size: 1.5rem;
    }

    .header-left {
      display: flex;
      align-items: center;
      gap: 16px;
    }

    .theme-chip {
      display: inline-flex;
      align-items: center;
      gap: 8px;
      padding: 6px 12px;
      border-radius: 999px;
      background: var(--raised);
      color: var(--muted);
      font-size: 0.85rem;
    }

    .theme-chip .dot {
      width: 10px;
      height: 10px;
      border-radius: 50%;
      background: var(--accent);
    }

    .layout {
      display: flex;
    }

    nav.sidebar {
      width: 220px;
      min-height: calc(100vh - 65px);
      padding: 24px 12px;
      border-right: 1px solid var(--border);
      background: var(--panel);
      flex-shrink: 0;
    }

    nav.sidebar a {
      display: block;
      padding: 10px 14px;
      margin-bottom: 4px;
      border-radius: 10px;
      color: var(--muted);
      text-decoration: none;
      font-size: 0.95rem;
    }

    nav.sidebar a:hover {
      background: var(--raised);
      color: var(--ink);
    }

    nav.sidebar a.active {
      background: var(--accent);
      color: #000000;
      font-weight: 600;
    }

    main {
      flex: 1;
      padding: 24px;
      display: grid;
      gap: 24px;
    }

    .row {
      display: grid;
      grid-template-columns: 2fr 1fr;
      gap: 24px;
    }

    .card {
      background: rgba(26, 26, 26, 0.8);
      border: 1px solid var(--border);
      border-radius: 14px;
      padding: 24px;
    }

    .card h2 {
      margin: 0;
      font-size: 1.2rem;
    }

    .card .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
      font-size: 0.9rem;
    }

    .calendar-head {
      display: flex;
      align-items: center;
      justify-content: space-between;
      margin-bottom: 20px;
    }

    .calendar-head .nav-buttons {
      display: flex;
      gap: 8px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 10px;
      background: var(--raised);
      color: var(--muted);
      padding: 8px 12px;
      font-size: 0.95rem;
      cursor: pointer;
    }

    button:hover {
      color: var(--ink);
    }

    button.primary {
      background: var(--accent);
      color: #000000;
      font-weight: 600;
      padding: 10px 18px;
    }

    .weekday-row,
    .day-grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 4px;
    }

    .weekday-row div {
      text-align: center;
      color: var(--muted);
      font-size: 0.8rem;
      padding: 6px 0;
      font-weight: 600;
    }

    .day-grid .blank {
      aspect-ratio: 1;
    }

    .day-grid button.day {
      aspect-ratio: 1;
      border-radius: 10px;
      background: transparent;
      color: var(--ink);
      font-size: 0.9rem;
      font-weight: 500;
    }

    .day-grid button.day:hover {
      background: var(--raised);
    }

    .day-grid button.day.today {
      background: var(--accent);
      color: #000000;
    }

    .day-grid button.day.selected {
      background: var(--raised);
      outline: 1px solid var(--accent);
    }

    .schedule {
      display: grid;
      gap: 12px;
      margin-top: 16px;
    }

    .event {
      position: relative;
      background: var(--raised);
      border-radius: 10px;
      padding: 14px 14px 14px 18px;
      overflow: hidden;
    }

    .event .bar {
      position: absolute;
      left: 0;
      top: 0;
      bottom: 0;
      width: 4px;
    }

    .event .title-line {
      display: flex;
      align-items: flex-start;
      justify-content: space-between;
      gap: 12px;
    }

    .event h3 {
      margin: 0;
      font-size: 0.95rem;
      font-weight: 600;
    }

    .event .time {
      color: var(--muted);
      font-size: 0.85rem;
      margin-top: 4px;
    }

    .event .mark {
      font-size: 1.1rem;
      line-height: 1;
    }

    .event .mark.done {
      color: var(--accent);
    }

    .event .mark.missed {
      color: var(--muted);
    }

    .event .category {
      display: inline-block;
      margin-top: 10px;
      padding: 3px 10px;
      border-radius: 999px;
      font-size: 0.75rem;
      color: var(--ink);
      background: rgba(255, 255, 255, 0.08);
    }

    .habit-table {
      margin-top: 16px;
      display: grid;
      gap: 14px;
      overflow-x: auto;
    }

    .habit-row {
      display: flex;
      align-items: center;
      gap: 12px;
    }

    .habit-row .label {
      width: 160px;
      flex-shrink: 0;
    }

    .habit-row .label .name {
      font-size: 0.9rem;
      font-weight: 600;
    }

    .habit-row .label .streak {
      color: var(--muted);
      font-size: 0.75rem;
      margin-top: 2px;
    }

    .habit-row .marks {
      display: flex;
      gap: 6px;
    }

    .habit-row .marks span {
      width: 14px;
      height: 14px;
      border-radius: 50%;
      flex-shrink: 0;
      border: 1px solid var(--border);
      background: transparent;
    }

    .habit-row .progress {
      width: 140px;
      flex-shrink: 0;
      margin-left: auto;
    }

    .habit-row .progress .track {
      height: 6px;
      border-radius: 999px;
      background: var(--raised);
      overflow: hidden;
    }

    .habit-row .progress .fill {
      height: 100%;
      border-radius: 999px;
    }

    .habit-row .progress .percent {
      color: var(--muted);
      font-size: 0.75rem;
      margin-top: 4px;
      text-align: right;
    }

    .modal-backdrop {
      position: fixed;
      inset: 0;
      background: rgba(0, 0, 0, 0.5);
      backdrop-filter: blur(4px);
      display: none;
      align-items: center;
      justify-content: center;
      z-index: 50;
    }

    .modal-backdrop.open {
      display: flex;
    }

    .modal {
      width: min(420px, calc(100vw - 32px));
      background: var(--panel);
      border: 1px solid var(--border);
      border-radius: 14px;
      padding: 24px;
    }

    .modal h2 {
      margin: 0 0 20px;
      font-size: 1.2rem;
    }

    .modal label {
      display: block;
      color: var(--muted);
      font-size: 0.85rem;
      margin-bottom: 6px;
    }

    .modal input,
    .modal select {
      width: 100%;
      background: var(--raised);
      border: 1px solid #3a3a3a;
      border-radius: 10px;
      padding: 10px 12px;
      color: var(--ink);
      font-size: 0.95rem;
      margin-bottom: 16px;
    }

    .modal input:focus,
    .modal select:focus {
      outline: none;
      border-color: var(--accent);
    }

    .modal .kind-row {
      display: flex;
      gap: 20px;
      margin-bottom: 16px;
      color: var(--ink);
      font-size: 0.95rem;
    }

    .modal .kind-row label {
      display: inline-flex;
      align-items: center;
      gap: 6px;
      margin: 0;
      color: var(--ink);
    }

    .modal .actions {
      display: flex;
      justify-content: flex-end;
      gap: 10px;
      margin-top: 8px;
    }

    .status {
      min-height: 1.2em;
      color: var(--muted);
      font-size: 0.9rem;
    }

    .status[data-type="error"] {
      color: #ef4444;
    }

    .status[data-type="ok"] {
      color: var(--accent);
    }

    @media (max-width: 900px) {
      .row {
        grid-template-columns: 1fr;
      }
      nav.sidebar {
        display: none;
      }
    }
  </style>
</head>
<body>
  <header>
    <div class="header-left">
      <h1>Habit Flow</h1>
      <span class="theme-chip"><span class="dot"></span>{{THEME_NAME}}</span>
    </div>
    <button class="primary" id="open-modal" type="button">+ Add Event</button>
  </header>

  <div class="layout">
    <nav class="sidebar">
      <a href="/">Dashboard</a>
      <a href="/" class="active">Calendar</a>
      <a href="/">Progress</a>
      <a href="/">Goals</a>
      <a href="/">Settings</a>
    </nav>

    <main>
      <div class="row">
        <section class="card">
          <div class="calendar-head">
            <div>
              <h2 id="month-label">&nbsp;</h2>
              <p class="subtitle">Manage your habits and events</p>
            </div>
            <div class="nav-buttons">
              <button id="prev-month" type="button" aria-label="Previous month">&lsaquo;</button>
              <button id="next-month" type="button" aria-label="Next month">&rsaquo;</button>
            </div>
          </div>
          <div class="weekday-row" id="weekday-row"></div>
          <div class="day-grid" id="day-grid"></div>
        </section>

        <section class="card">
          <h2 id="panel-title">Today's Schedule</h2>
          <div class="schedule" id="schedule"></div>
        </section>
      </div>

      <section class="card">
        <h2>Habit overview</h2>
        <p class="subtitle">Last 30 days, fixed for this session</p>
        <div class="habit-table" id="habit-table"></div>
      </section>

      <div class="status" id="status"></div>
    </main>
  </div>

  <div class="modal-backdrop" id="modal-backdrop">
    <div class="modal">
      <h2>Add New Event</h2>
      <form id="add-form">
        <label for="field-title">Title</label>
        <input id="field-title" name="title" type="text" required />

        <label for="field-time">Time</label>
        <input id="field-time" name="time" type="time" required />

        <label>Type</label>
        <div class="kind-row">
          <label><input type="radio" name="kind" value="event" checked /> Event</label>
          <label><input type="radio" name="kind" value="habit" /> Habit</label>
        </div>

        <label for="field-category">Category</label>
        <select id="field-category" name="category" required>
          <option value="">Select a category</option>
          <option value="Wellness">Wellness</option>
          <option value="Fitness">Fitness</option>
          <option value="Work">Work</option>
          <option value="Personal Development">Personal Development</option>
        </select>

        <div class="actions">
          <button type="button" id="cancel-modal">Cancel</button>
          <button type="submit" class="primary">Add Event</button>
        </div>
      </form>
    </div>
  </div>

  <script>
    const monthLabelEl = document.getElementById('month-label');
    const panelTitleEl = document.getElementById('panel-title');
    const weekdayRowEl = document.getElementById('weekday-row');
    const dayGridEl = document.getElementById('day-grid');
    const scheduleEl = document.getElementById('schedule');
    const habitTableEl = document.getElementById('habit-table');
    const statusEl = document.getElementById('status');
    const backdropEl = document.getElementById('modal-backdrop');
    const addFormEl = document.getElementById('add-form');

    const categoryColors = {
      'Fitness': '{{THEME_COLOR}}',
      'Wellness': '#8b5cf6',
      'Work': '#f97316',
      'Personal Development': '#3b82f6'
    };

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const renderCalendar = (snapshot) => {
      monthLabelEl.textContent = snapshot.month_label;
      panelTitleEl.textContent = snapshot.panel_title;

      weekdayRowEl.innerHTML = snapshot.weekdays
        .map((day) => `<div>${day}</div>`)
        .join('');

      dayGridEl.innerHTML = '';
      snapshot.cells.forEach((cell) => {
        if (cell.day === null) {
          const blank = document.createElement('div');
          blank.className = 'blank';
          dayGridEl.appendChild(blank);
          return;
        }

        const button = document.createElement('button');
        button.type = 'button';
        button.className = 'day';
        if (cell.is_today) button.classList.add('today');
        if (cell.is_selected) button.classList.add('selected');
        button.textContent = cell.day;
        button.addEventListener('click', () => selectDay(cell.day));
        dayGridEl.appendChild(button);
      });

      scheduleEl.innerHTML = '';
      snapshot.events.forEach((event) => {
        const card = document.createElement('div');
        card.className = 'event';

        const color = categoryColors[event.category] || '#6b7280';
        const bar = document.createElement('div');
        bar.className = 'bar';
        bar.style.background = color;
        card.appendChild(bar);

        const titleLine = document.createElement('div');
        titleLine.className = 'title-line';

        const left = document.createElement('div');
        const title = document.createElement('h3');
        title.textContent = event.title;
        const time = document.createElement('div');
        time.className = 'time';
        time.textContent = event.time;
        left.appendChild(title);
        left.appendChild(time);
        titleLine.appendChild(left);

        if (event.type === 'habit') {
          const mark = document.createElement('span');
          mark.className = event.completed ? 'mark done' : 'mark missed';
          mark.textContent = event.completed ? '✓' : '✗';
          titleLine.appendChild(mark);
        }

        card.appendChild(titleLine);

        const category = document.createElement('span');
        category.className = 'category';
        category.textContent = event.category;
        card.appendChild(category);

        scheduleEl.appendChild(card);
      });
    };

    const renderOverview = (overview) => {
      habitTableEl.innerHTML = '';
      overview.habits.forEach((habit) => {
        const row = document.createElement('div');
        row.className = 'habit-row';

        const label = document.createElement('div');
        label.className = 'label';
        const name = document.createElement('div');
        name.className = 'name';
        name.textContent = habit.name;
        const streak = document.createElement('div');
        streak.className = 'streak';
        streak.textContent = `${habit.streak_days} day streak`;
        label.appendChild(name);
        label.appendChild(streak);
        row.appendChild(label);

        const marks = document.createElement('div');
        marks.className = 'marks';
        habit.completions.forEach((done) => {
          const dot = document.createElement('span');
          if (done) {
            dot.style.background = habit.color;
            dot.style.borderColor = habit.color;
          }
          marks.appendChild(dot);
        });
        row.appendChild(marks);

        const progress = document.createElement('div');
        progress.className = 'progress';
        const track = document.createElement('div');
        track.className = 'track';
        const fill = document.createElement('div');
        fill.className = 'fill';
        fill.style.width = `${habit.progress}%`;
        fill.style.background = habit.color;
        track.appendChild(fill);
        const percent = document.createElement('div');
        percent.className = 'percent';
        percent.textContent = `${habit.progress}%`;
        progress.appendChild(track);
        progress.appendChild(percent);
        row.appendChild(progress);

        habitTableEl.appendChild(row);
      });
    };

    const request = async (path, body) => {
      const res = await fetch(path, body === undefined ? undefined : {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      return res.json();
    };

    const loadCalendar = async () => {
      renderCalendar(await request('/api/calendar'));
    };

    const navigate = (direction) => {
      request('/api/calendar/navigate', { direction })
        .then(renderCalendar)
        .catch((err) => setStatus(err.message, 'error'));
    };

    const selectDay = (day) => {
      request('/api/calendar/select', { day })
        .then(renderCalendar)
        .catch((err) => setStatus(err.message, 'error'));
    };

    document.getElementById('prev-month')
      .addEventListener('click', () => navigate('previous'));
    document.getElementById('next-month')
      .addEventListener('click', () => navigate('next'));

    const openModal = () => backdropEl.classList.add('open');
    const closeModal = () => {
      backdropEl.classList.remove('open');
      addFormEl.reset();
    };

    document.getElementById('open-modal').addEventListener('click', openModal);
    document.getElementById('cancel-modal').addEventListener('click', closeModal);
    backdropEl.addEventListener('click', (event) => {
      if (event.target === backdropEl) closeModal();
    });

    addFormEl.addEventListener('submit', (event) => {
      event.preventDefault();
      const form = new FormData(addFormEl);
      request('/api/events', {
        title: form.get('title'),
        time: form.get('time'),
        type: form.get('kind'),
        category: form.get('category')
      })
        .then(() => {
          closeModal();
          setStatus('Event added', 'ok');
          setTimeout(() => setStatus('', ''), 1200);
          return loadCalendar();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    loadCalendar().catch((err) => setStatus(err.message, 'error'));
    request('/api/overview')
      .then(renderOverview)
      .catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
